//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;

/// Generate template code (TokenStream) for fields.
///
/// Scalar keys come first; nested tables follow, since TOML puts every key
/// after a `[table]` header into that table.
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let scalars = fields
        .iter()
        .filter(|f| !f.sub)
        .map(|f| generate_field_template_code(f));
    let tables = fields
        .iter()
        .filter(|f| f.sub)
        .map(|f| generate_sub_template_code(f));

    quote! {
        #(#scalars)*
        #(#tables)*
    }
}

fn doc_code(info: &FieldInfo) -> TokenStream {
    match info.doc {
        Some(ref doc) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        None => quote! {},
    }
}

/// Nested config: blank line, field doc, then the sub config's own table.
fn generate_sub_template_code(info: &FieldInfo) -> TokenStream {
    let field_ty = &info.ty;
    let doc_code = doc_code(info);
    quote! {
        out.push('\n');
        #doc_code
        out.push_str(&<#field_ty>::template_with_header());
    }
}

/// Generate TOML template code for a single key, valued from `Default`.
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;
    let doc_code = doc_code(info);

    let inline_code = match info.inline_doc {
        Some(ref inline) => {
            let comment = format!("  # {inline}");
            quote! { out.push_str(#comment); }
        }
        None => quote! {},
    };

    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        #inline_code
        out.push('\n');
    }
}

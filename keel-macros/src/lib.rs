mod decode_column;
mod decode_table;

use decode_column::ColumnMetadata;
use decode_table::decode_table;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemStruct, parse_macro_input};

fn encode_field_def(column: &ColumnMetadata) -> TokenStream2 {
    let name = &column.name;
    let ident = column.ident.to_string();
    let ident = ident.strip_prefix("r#").unwrap_or(&ident);
    let mut result = quote!(::keel::FieldDef::new(#name).ident(#ident));
    if column.nullable {
        result = quote!(#result.nullable());
    }
    if column.not_null {
        result = quote!(#result.not_null());
    }
    if column.null_zero {
        result = quote!(#result.null_zero());
    }
    if let Some(default) = &column.default {
        result = quote!(#result.sql_default(#default));
    }
    if column.primary_key {
        result = quote!(#result.primary_key());
    }
    if column.auto_increment {
        result = quote!(#result.auto_increment());
    }
    result
}

/// Map a struct with named fields to a table.
///
/// Struct attributes: `#[keel(name = "..", schema = "..", alias = "..", hooks)]`.
/// Field attributes: `#[keel(name = "..", primary_key, auto_increment, nullzero,
/// notnull, default = "..", skip)]`. Fields of type `Option<T>` are nullable.
#[proc_macro_derive(Entity, attributes(keel))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as ItemStruct);
    let table = match decode_table(&item) {
        Ok(v) => v,
        Err(e) => return e.to_compile_error().into(),
    };
    let ident = &item.ident;
    let table_name = &table.name;
    let mut table_ref = quote!(::keel::TableRef::new(#table_name));
    if !table.schema.is_empty() {
        let schema = &table.schema;
        table_ref = quote!(#table_ref.with_schema(#schema));
    }
    if !table.alias.is_empty() {
        let alias = &table.alias;
        table_ref = quote!(#table_ref.with_alias(#alias));
    }
    let field_defs = table.columns.iter().map(encode_field_def);
    let indexes: Vec<_> = (0..table.columns.len()).collect();
    let fields: Vec<_> = table.columns.iter().map(|c| &c.ident).collect();
    let types = table.columns.iter().map(|c| &c.ty);
    let insert_hook = if table.hooks {
        quote!()
    } else {
        quote!(impl ::keel::InsertHook for #ident {})
    };
    quote! {
        impl ::keel::Entity for #ident {
            fn table() -> &'static ::keel::TableDef {
                static TABLE: ::std::sync::LazyLock<::keel::TableDef> =
                    ::std::sync::LazyLock::new(|| {
                        ::keel::TableDef::new(#table_ref, [#(#field_defs),*])
                            .with_hooks(::keel::Hooks::of::<#ident>())
                    });
                &TABLE
            }
        }

        impl ::keel::FieldAccessor for #ident {
            fn table_def(&self) -> &'static ::keel::TableDef {
                <Self as ::keel::Entity>::table()
            }

            fn field_value(&self, field: &::keel::FieldDef) -> ::keel::Value {
                match field.index {
                    #(#indexes => ::keel::AsValue::as_value(::std::clone::Clone::clone(&self.#fields)),)*
                    _ => ::keel::Value::Null,
                }
            }

            fn set_field_value(
                &mut self,
                field: &::keel::FieldDef,
                value: ::keel::Value,
            ) -> ::keel::Result<()> {
                match field.index {
                    #(#indexes => {
                        self.#fields = <#types as ::keel::AsValue>::try_from_value(value)?;
                    })*
                    _ => {
                        return Err(::keel::Error::msg(format!(
                            "Field `{}` does not exist in `{}`",
                            field.name,
                            stringify!(#ident),
                        )));
                    }
                }
                Ok(())
            }
        }

        #insert_hook
    }
    .into()
}

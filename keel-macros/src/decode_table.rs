use crate::decode_column::{ColumnMetadata, decode_column};
use convert_case::{Case, Casing};
use syn::{Error, Fields, ItemStruct, LitStr, Result};

pub(crate) struct TableMetadata {
    pub(crate) name: String,
    pub(crate) schema: String,
    pub(crate) alias: String,
    /// Implement `InsertHook` by hand instead of the empty default.
    pub(crate) hooks: bool,
    /// Mapped columns only, skipped fields are left out.
    pub(crate) columns: Vec<ColumnMetadata>,
}

pub(crate) fn decode_table(item: &ItemStruct) -> Result<TableMetadata> {
    if !item.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &item.generics,
            "Entity cannot be derived for generic structs",
        ));
    }
    let Fields::Named(fields) = &item.fields else {
        return Err(Error::new_spanned(
            &item.ident,
            "Entity can be derived only for structs with named fields",
        ));
    };
    let mut name = item.ident.to_string().to_case(Case::Snake);
    if name.starts_with('_') {
        name.remove(0);
    }
    let mut metadata = TableMetadata {
        name,
        schema: String::new(),
        alias: String::new(),
        hooks: false,
        columns: Vec::new(),
    };
    for attr in &item.attrs {
        if !attr.path().is_ident("keel") {
            continue;
        }
        attr.parse_nested_meta(|arg| {
            let string = |attribute: &str| -> Result<String> {
                let value: LitStr = arg.value()?.parse().map_err(|_| {
                    arg.error(format!(
                        "Error while parsing `{attribute}`, use it like: `#[keel({attribute} = \"value\")]`"
                    ))
                })?;
                Ok(value.value())
            };
            if arg.path.is_ident("name") {
                metadata.name = string("name")?;
            } else if arg.path.is_ident("schema") {
                metadata.schema = string("schema")?;
            } else if arg.path.is_ident("alias") {
                metadata.alias = string("alias")?;
            } else if arg.path.is_ident("hooks") {
                metadata.hooks = true;
            } else {
                return Err(arg.error("Unknown attribute inside keel macro"));
            }
            Ok(())
        })?;
    }
    for field in &fields.named {
        let column = decode_column(field)?;
        if column.skip {
            continue;
        }
        if metadata.columns.iter().any(|v| v.name == column.name) {
            return Err(Error::new_spanned(
                field,
                format!("Column `{}` is declared more than once", column.name),
            ));
        }
        metadata.columns.push(column);
    }
    Ok(metadata)
}

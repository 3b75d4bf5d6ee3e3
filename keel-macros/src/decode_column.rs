use quote::ToTokens;
use syn::{Error, Field, GenericArgument, Ident, LitStr, PathArguments, Result, Type};

pub(crate) struct ColumnMetadata {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) name: String,
    pub(crate) nullable: bool,
    pub(crate) not_null: bool,
    pub(crate) null_zero: bool,
    pub(crate) default: Option<String>,
    pub(crate) primary_key: bool,
    pub(crate) auto_increment: bool,
    pub(crate) skip: bool,
}

/// The field type is `Option<T>` (or a path ending with it).
fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    let Some(last) = path.path.segments.last() else {
        return false;
    };
    last.ident == "Option"
        && matches!(
            &last.arguments,
            PathArguments::AngleBracketed(args)
                if matches!(args.args.first(), Some(GenericArgument::Type(..)))
        )
}

pub(crate) fn decode_column(field: &Field) -> Result<ColumnMetadata> {
    let Some(ident) = field.ident.clone() else {
        return Err(Error::new_spanned(
            field,
            "Entity fields must be named, tuple structs are not supported",
        ));
    };
    let mut name = ident.to_string();
    if name.starts_with("r#") {
        name.drain(..2);
    }
    if name.starts_with('_') {
        name.remove(0);
    }
    let mut metadata = ColumnMetadata {
        ident,
        ty: field.ty.clone(),
        name,
        nullable: is_option(&field.ty),
        not_null: false,
        null_zero: false,
        default: None,
        primary_key: false,
        auto_increment: false,
        skip: false,
    };
    for attr in &field.attrs {
        if !attr.path().is_ident("keel") {
            continue;
        }
        attr.parse_nested_meta(|arg| {
            if arg.path.is_ident("name") {
                let value: LitStr = arg.value()?.parse().map_err(|_| {
                    arg.error("Error while parsing `name`, use it like: `#[keel(name = \"my_column\")]`")
                })?;
                metadata.name = value.value();
            } else if arg.path.is_ident("default") {
                let value: LitStr = arg.value()?.parse().map_err(|_| {
                    arg.error("Error while parsing `default`, use it like: `#[keel(default = \"now()\")]`")
                })?;
                metadata.default = Some(value.value());
                metadata.null_zero = true;
            } else if arg.path.is_ident("primary_key") || arg.path.is_ident("pk") {
                metadata.primary_key = true;
                metadata.not_null = true;
            } else if arg.path.is_ident("auto_increment") || arg.path.is_ident("autoincrement") {
                metadata.auto_increment = true;
                metadata.null_zero = true;
            } else if arg.path.is_ident("nullzero") {
                metadata.null_zero = true;
            } else if arg.path.is_ident("notnull") {
                metadata.not_null = true;
            } else if arg.path.is_ident("skip") {
                metadata.skip = true;
            } else {
                return Err(arg.error(format!(
                    "Unknown attribute `{}` inside keel macro",
                    arg.path.to_token_stream()
                )));
            }
            Ok(())
        })?;
    }
    Ok(metadata)
}

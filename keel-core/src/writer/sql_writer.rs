use crate::{
    Feature, FeatureSet, Statement, TableRef, Value,
    writer::{Context, WriteMode},
};
use std::fmt::Write;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($this:ident, $context:ident, $out:ident, $value:expr) => {{
        if $value.is_infinite() {
            $this.write_value_infinity($context, $out, $value.is_sign_negative());
        } else if $value.is_nan() {
            $this.write_value_nan($context, $out);
        } else {
            let mut buffer = ryu::Buffer::new();
            $out.push_str(buffer.format($value));
        }
    }};
}

/// Dialect printer converting values and identifiers into SQL text.
///
/// Stateless: every method only appends to the `Statement` it receives.
pub trait SqlWriter: Send + Sync {
    fn as_dyn(&self) -> &dyn SqlWriter;

    /// Capabilities of the dialect.
    fn features(&self) -> FeatureSet;

    fn has_feature(&self, feature: Feature) -> bool {
        self.features().has(feature)
    }

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(
        &self,
        _context: &mut Context,
        out: &mut Statement,
        value: &str,
        search: char,
        replace: &str,
    ) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.push_str(&value[position..i]);
                out.push_str(replace);
                position = i + 1;
            }
        }
        out.push_str(&value[position..]);
    }

    /// Quote identifiers ("name") doubling inner quotes.
    fn write_identifier_quoted(&self, context: &mut Context, out: &mut Statement, value: &str) {
        out.push('"');
        self.write_escaped(context, out, value, '"', "\"\"");
        out.push('"');
    }

    /// Render a table reference, declaring its alias when requested.
    fn write_table_ref(
        &self,
        context: &mut Context,
        out: &mut Statement,
        value: &TableRef,
        declare_alias: bool,
    ) {
        if !value.schema.is_empty() {
            self.write_identifier_quoted(context, out, &value.schema);
            out.push('.');
        }
        self.write_identifier_quoted(context, out, &value.name);
        if declare_alias && !value.alias.is_empty() {
            out.push_str(" AS ");
            self.write_identifier_quoted(context, out, &value.alias);
        }
    }

    /// Render a value according to the write mode of the context.
    fn write_value(&self, context: &mut Context, out: &mut Statement, value: &Value) {
        match context.mode {
            WriteMode::Template => out.push('?'),
            WriteMode::Inline => self.write_value_literal(context, out, value),
            WriteMode::Bind => {
                if value.is_null() {
                    self.write_value_none(context, out);
                } else {
                    let position = out.bind(value.clone());
                    self.write_placeholder(context, out, position);
                }
            }
        }
    }

    /// Render the placeholder of the bound argument at the 1-based `position`.
    fn write_placeholder(&self, _context: &mut Context, out: &mut Statement, _position: usize) {
        out.push('?');
    }

    /// Render a concrete value (including proper quoting / escaping).
    fn write_value_literal(&self, context: &mut Context, out: &mut Statement, value: &Value) {
        match value {
            v if v.is_null() => self.write_value_none(context, out),
            Value::Boolean(Some(v)) => self.write_value_bool(context, out, *v),
            Value::Int8(Some(v)) => write_integer!(out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::UInt8(Some(v)) => write_integer!(out, *v),
            Value::UInt16(Some(v)) => write_integer!(out, *v),
            Value::UInt32(Some(v)) => write_integer!(out, *v),
            Value::UInt64(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => write_float!(self, context, out, *v),
            Value::Float64(Some(v)) => write_float!(self, context, out, *v),
            Value::Decimal(Some(v)) => drop(write!(out, "{}", v)),
            Value::Char(Some(v)) => {
                let mut buf = [0u8; 4];
                self.write_value_string(context, out, v.encode_utf8(&mut buf));
            }
            Value::Varchar(Some(v)) => self.write_value_string(context, out, v),
            Value::Blob(Some(v)) => self.write_value_blob(context, out, v.as_ref()),
            Value::Date(Some(v)) => self.write_value_date(context, out, v, false),
            Value::Time(Some(v)) => self.write_value_time(context, out, v, false),
            Value::Timestamp(Some(v)) => self.write_value_timestamp(context, out, v),
            Value::TimestampWithTimezone(Some(v)) => {
                self.write_value_timestamptz(context, out, v)
            }
            Value::Uuid(Some(v)) => drop(write!(out, "'{}'", v)),
            _ => {
                log::error!("Cannot write {:?}", value);
            }
        };
    }

    /// Render NULL literal.
    fn write_value_none(&self, _context: &mut Context, out: &mut Statement) {
        out.push_str("NULL");
    }

    /// Render boolean literal.
    fn write_value_bool(&self, _context: &mut Context, out: &mut Statement, value: bool) {
        out.push_str(["FALSE", "TRUE"][value as usize]);
    }

    /// Render +/- INF.
    fn write_value_infinity(&self, _context: &mut Context, out: &mut Statement, negative: bool) {
        out.push_str(if negative {
            "CAST('-inf' AS DOUBLE)"
        } else {
            "CAST('inf' AS DOUBLE)"
        });
    }

    /// Render NaN.
    fn write_value_nan(&self, _context: &mut Context, out: &mut Statement) {
        out.push_str("CAST('NaN' AS DOUBLE)");
    }

    /// Render and escape a string literal using single quotes.
    fn write_value_string(&self, context: &mut Context, out: &mut Statement, value: &str) {
        out.push('\'');
        self.write_escaped(context, out, value, '\'', "''");
        out.push('\'');
    }

    /// Render a blob literal using hex escapes.
    fn write_value_blob(&self, _context: &mut Context, out: &mut Statement, value: &[u8]) {
        out.push('\'');
        for b in value {
            let _ = write!(out, "\\x{:02X}", b);
        }
        out.push('\'');
    }

    /// Render a DATE literal (optionally as part of TIMESTAMP composition).
    fn write_value_date(
        &self,
        _context: &mut Context,
        out: &mut Statement,
        value: &Date,
        timestamp: bool,
    ) {
        let b = if timestamp { "" } else { "'" };
        let _ = write!(
            out,
            "{b}{:04}-{:02}-{:02}{b}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    /// Render a TIME literal (optionally as part of TIMESTAMP composition).
    fn write_value_time(
        &self,
        _context: &mut Context,
        out: &mut Statement,
        value: &Time,
        timestamp: bool,
    ) {
        let mut subsecond = value.nanosecond();
        let mut width = 9;
        while width > 1 && subsecond % 10 == 0 {
            subsecond /= 10;
            width -= 1;
        }
        let b = if timestamp { "" } else { "'" };
        let _ = write!(
            out,
            "{b}{:02}:{:02}:{:02}.{:0width$}{b}",
            value.hour(),
            value.minute(),
            value.second(),
            subsecond
        );
    }

    /// Render a TIMESTAMP literal.
    fn write_value_timestamp(
        &self,
        context: &mut Context,
        out: &mut Statement,
        value: &PrimitiveDateTime,
    ) {
        out.push('\'');
        self.write_value_date(context, out, &value.date(), true);
        out.push(' ');
        self.write_value_time(context, out, &value.time(), true);
        out.push('\'');
    }

    /// Render a TIMESTAMPTZ literal, normalized to UTC.
    fn write_value_timestamptz(
        &self,
        context: &mut Context,
        out: &mut Statement,
        value: &OffsetDateTime,
    ) {
        let date_time = value.to_offset(time::UtcOffset::UTC);
        out.push('\'');
        self.write_value_date(context, out, &date_time.date(), true);
        out.push(' ');
        self.write_value_time(context, out, &date_time.time(), true);
        out.push_str("+00:00'");
    }

    /// Value keyword asking the database to use the column default.
    fn write_default_placeholder(&self, _context: &mut Context, out: &mut Statement) {
        out.push_str("DEFAULT");
    }

    /// `REPLACE INTO `, `INSERT IGNORE INTO ` or `INSERT INTO `. Replace wins.
    ///
    /// `IGNORE` is written even when the dialect lacks [`Feature::InsertIgnore`],
    /// the mismatch is only logged.
    fn write_insert_verb(
        &self,
        _context: &mut Context,
        out: &mut Statement,
        replace: bool,
        ignore: bool,
    ) {
        if replace {
            out.push_str("REPLACE ");
        } else {
            out.push_str("INSERT ");
            if ignore {
                if !self.has_feature(Feature::InsertIgnore) {
                    log::warn!("The dialect does not declare `INSERT IGNORE` support");
                }
                out.push_str("IGNORE ");
            }
        }
        out.push_str("INTO ");
    }

    /// Keyword introducing the assignments of the conflict action.
    fn write_conflict_set(&self, _context: &mut Context, out: &mut Statement) {
        if self.has_feature(Feature::InsertOnDuplicateKey) {
            out.push(' ');
        } else {
            out.push_str(" SET ");
        }
    }

    /// Assign every column its proposed value in the conflict action.
    fn write_set_excluded(&self, context: &mut Context, out: &mut Statement, columns: &[&str]) {
        out.push_str(" SET ");
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.write_identifier_quoted(context, out, column);
            out.push_str(" = EXCLUDED.");
            self.write_identifier_quoted(context, out, column);
        }
    }
}

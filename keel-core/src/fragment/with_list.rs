use crate::{Context, Error, Feature, QueryAppender, Result, SqlWriter, Statement};
use std::{
    borrow::Cow,
    fmt::{self, Debug},
};

/// Common table expressions, rendered as `WITH "name" AS (...), ... `.
#[derive(Default)]
pub struct WithList<'q> {
    queries: Vec<(Cow<'static, str>, Box<dyn QueryAppender + Send + 'q>)>,
}

impl<'q> WithList<'q> {
    pub fn add(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        query: impl QueryAppender + Send + 'q,
    ) {
        self.queries.push((name.into(), Box::new(query)));
    }
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn write(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
    ) -> Result<()> {
        if self.queries.is_empty() {
            return Ok(());
        }
        if !writer.has_feature(Feature::Cte) {
            return Err(Error::msg(
                "The dialect does not support common table expressions (WITH)",
            ));
        }
        out.push_str("WITH ");
        for (i, (name, query)) in self.queries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            writer.write_identifier_quoted(context, out, name);
            out.push_str(" AS (");
            query.write_query(writer, context, out)?;
            out.push(')');
        }
        out.push(' ');
        Ok(())
    }
}

impl Debug for WithList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.queries.iter().map(|(name, _)| name))
            .finish()
    }
}

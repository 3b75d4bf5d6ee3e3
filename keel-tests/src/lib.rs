use keel::{
    Driver, Executor, GenericSqlWriter, QueryResult, Result, RowLabeled, RowsAffected, SqlWriter,
    Statement, Value, stream::{self, Stream},
};
use log::LevelFilter;
use std::{collections::VecDeque, env, sync::Arc};

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}

/// Driver rendering with any writer, no connection behind it.
#[derive(Debug, Clone, Default)]
pub struct MockDriver<W> {
    pub writer: W,
}

impl<W: SqlWriter + Clone> Driver for MockDriver<W> {
    type SqlWriter = W;

    const NAME: &'static str = "mock";

    fn sql_writer(&self) -> W {
        self.writer.clone()
    }
}

/// Executor that records every statement and answers with queued results.
///
/// Without a queued answer a statement affects one row.
#[derive(Debug, Default)]
pub struct MockExecutor<W = GenericSqlWriter> {
    pub driver: MockDriver<W>,
    pub statements: Vec<Statement>,
    pub responses: VecDeque<Result<Vec<QueryResult>>>,
}

impl<W: SqlWriter + Clone> MockExecutor<W> {
    pub fn new(writer: W) -> Self {
        Self {
            driver: MockDriver { writer },
            statements: Vec::new(),
            responses: VecDeque::new(),
        }
    }

    /// Answer the next statement with `results`.
    pub fn respond(&mut self, results: Vec<QueryResult>) -> &mut Self {
        self.responses.push_back(Ok(results));
        self
    }

    /// Answer the next statement with rows having the given labels.
    pub fn respond_rows<const N: usize>(
        &mut self,
        labels: [&str; N],
        rows: Vec<[Value; N]>,
    ) -> &mut Self {
        let labels: Arc<[String]> = labels.iter().map(|v| v.to_string()).collect();
        let rows: Vec<QueryResult> = rows
            .into_iter()
            .map(|v| RowLabeled::new(labels.clone(), Box::new(v)).into())
            .collect();
        self.respond(rows)
    }

    /// Answer the next statement with an affected count and generated id.
    pub fn respond_affected(&mut self, rows_affected: u64, last_affected_id: Option<i64>) -> &mut Self {
        self.respond(vec![
            RowsAffected {
                rows_affected,
                last_affected_id,
            }
            .into(),
        ])
    }

    /// Fail the next statement.
    pub fn respond_error(&mut self, error: keel::Error) -> &mut Self {
        self.responses.push_back(Err(error));
        self
    }

    /// Sql of the statements received so far.
    pub fn sql(&self) -> Vec<&str> {
        self.statements.iter().map(Statement::as_str).collect()
    }
}

impl<W: SqlWriter + Clone> Executor for MockExecutor<W> {
    type Driver = MockDriver<W>;

    fn driver(&self) -> &Self::Driver {
        &self.driver
    }

    fn run(&mut self, statement: Statement) -> impl Stream<Item = Result<QueryResult>> + Send {
        log::trace!("Mock received: {}", statement);
        self.statements.push(statement);
        let results: Vec<Result<QueryResult>> = match self.responses.pop_front() {
            Some(Ok(v)) => v.into_iter().map(Ok).collect(),
            Some(Err(e)) => vec![Err(e)],
            None => vec![Ok(RowsAffected {
                rows_affected: 1,
                last_affected_id: None,
            }
            .into())],
        };
        stream::iter(results)
    }
}

//! The session adapter.
//!
//! One adapter instance owns one HiveServer2 connection (with an open
//! session), one metastore connection, and at most one execution
//! handle. All operations are blocking; `&mut self` receivers make the
//! single-caller contract structural.

pub mod connection;
pub mod state;

use hive_thrift::{
    CliServiceSyncClient, MetastoreSyncClient, TCliServiceSyncClient, TColumnValue,
    TExecuteStatementReq, TFetchOrientation, TFetchResultsReq, TMetastoreSyncClient,
    TOpenSessionReq, TProtocolVersion, TRow, TSessionHandle, TStatus, TStatusCode, Table,
};
use tracing::{debug, info};

use crate::config::{Endpoint, HiveConfig};
use crate::error::{HiveError, HiveResult};

use self::connection::{open_protocol_pair, ProtocolIn, ProtocolOut};
use self::state::ExecutionState;

/// Rows requested per round trip by [`HiveClient::fetch_all`].
const FETCH_ALL_BATCH_SIZE: i64 = 1000;

/// Session adapter over one HiveServer2 connection and one metastore
/// connection.
///
/// The adapter tracks a single execution handle: each successful
/// [`execute`](HiveClient::execute) overwrites it, making any prior
/// unfetched result unreachable, and every fetch operates on it. The
/// session is held for the adapter's lifetime and never explicitly
/// closed; releasing the sockets is left to drop.
///
/// Generic over the two service traits so the execution state machine
/// can be exercised against scripted responses; use
/// [`HiveConnection::connect`] for the real TCP stack.
pub struct HiveClient<C, M> {
    cli: C,
    meta: M,
    session: TSessionHandle,
    execution: ExecutionState,
}

/// Fully wired adapter over binary-protocol TCP connections.
pub type HiveConnection = HiveClient<
    CliServiceSyncClient<ProtocolIn, ProtocolOut>,
    MetastoreSyncClient<ProtocolIn, ProtocolOut>,
>;

impl HiveConnection {
    /// Connects to both services and opens a HiveServer2 session.
    ///
    /// The query-engine connection is established first; if the
    /// metastore connection then fails, the already-open socket is
    /// released by drop and the error is returned. The server-side
    /// session is not cleaned up on partial failure.
    pub fn connect(config: &HiveConfig) -> HiveResult<Self> {
        info!("connecting to HiveServer2 at {}", config.hive_server2);
        let (i_prot, o_prot) = open_protocol_pair(&config.hive_server2, &config.timeouts)?;
        let mut cli = CliServiceSyncClient::new(i_prot, o_prot);
        let session = negotiate_session(&mut cli, &config.hive_server2)?;

        info!("connecting to metastore at {}", config.metastore);
        let (i_prot, o_prot) = open_protocol_pair(&config.metastore, &config.timeouts)?;
        let meta = MetastoreSyncClient::new(i_prot, o_prot);

        info!("session established");
        Ok(HiveClient::new(cli, meta, session))
    }
}

impl<C, M> HiveClient<C, M>
where
    C: TCliServiceSyncClient,
    M: TMetastoreSyncClient,
{
    /// Builds an adapter from already-connected service clients and an
    /// open session handle.
    pub fn new(cli: C, meta: M, session: TSessionHandle) -> Self {
        HiveClient {
            cli,
            meta,
            session,
            execution: ExecutionState::Idle,
        }
    }

    /// Submits `query` on the adapter's session.
    ///
    /// On `SUCCESS_STATUS` or `SUCCESS_WITH_INFO_STATUS` the returned
    /// operation handle replaces any previously stored one. On any
    /// other status the prior handle stays fetchable and
    /// [`HiveError::Execution`] carries the server's error code and
    /// message.
    pub fn execute(&mut self, query: &str) -> HiveResult<()> {
        debug!("executing statement ({} bytes)", query.len());
        let req = TExecuteStatementReq::new(self.session.clone(), query);
        let resp = self.cli.execute_statement(req)?;
        if !is_success(&resp.status) {
            return Err(HiveError::Execution {
                code: resp.status.error_code.unwrap_or_default(),
                message: resp.status.error_message.unwrap_or_default(),
            });
        }
        let handle = resp.operation_handle.ok_or_else(|| {
            HiveError::Protocol("ExecuteStatement succeeded without an operation handle".to_owned())
        })?;
        self.execution.activate(handle);
        Ok(())
    }

    /// First column of the first row of the active result set.
    ///
    /// Always fetches from the origin (`FETCH_FIRST`), independent of
    /// any cursor movement from earlier batch fetches. Fails with
    /// [`HiveError::EmptyResult`] when the result set has no rows;
    /// callers needing full rows use [`fetch_n`](Self::fetch_n) or
    /// [`fetch_all`](Self::fetch_all).
    pub fn fetch_one(&mut self) -> HiveResult<TColumnValue> {
        let mut rows = self.fetch(TFetchOrientation::FETCH_FIRST, 1)?;
        if rows.is_empty() {
            return Err(HiveError::EmptyResult);
        }
        let mut row = rows.remove(0);
        if row.col_vals.is_empty() {
            return Err(HiveError::Protocol("fetched row has no columns".to_owned()));
        }
        Ok(row.col_vals.remove(0))
    }

    /// Up to `num_rows` rows, continuing forward from the cursor.
    ///
    /// Single round trip; the server may return fewer rows than
    /// requested, including none, and that is not an error.
    pub fn fetch_n(&mut self, num_rows: i64) -> HiveResult<Vec<TRow>> {
        self.fetch(TFetchOrientation::FETCH_NEXT, num_rows)
    }

    /// All remaining rows of the active result set, in order.
    ///
    /// Fetches forward in batches of 1000 until a batch comes back
    /// empty; a short non-empty batch keeps the loop going. The whole
    /// result set is materialized in memory.
    pub fn fetch_all(&mut self) -> HiveResult<Vec<TRow>> {
        let mut rows = Vec::new();
        loop {
            let batch = self.fetch(TFetchOrientation::FETCH_NEXT, FETCH_ALL_BATCH_SIZE)?;
            if batch.is_empty() {
                break;
            }
            rows.extend(batch);
        }
        debug!("fetch_all materialized {} rows", rows.len());
        Ok(rows)
    }

    /// One `FetchResults` round trip against the active execution. A
    /// response without a row set counts as zero rows.
    fn fetch(&mut self, orientation: TFetchOrientation, max_rows: i64) -> HiveResult<Vec<TRow>> {
        let operation_handle = self.execution.handle()?.clone();
        debug!("fetching up to {max_rows} rows");
        let req = TFetchResultsReq {
            operation_handle,
            orientation,
            max_rows,
        };
        let resp = self.cli.fetch_results(req)?;
        Ok(resp.results.map(|rowset| rowset.rows).unwrap_or_default())
    }

    /// Metastore lookup of one table's descriptor. Pure passthrough;
    /// declared metastore exceptions propagate as Thrift user errors.
    pub fn get_table(&mut self, dbname: &str, tbl_name: &str) -> HiveResult<Table> {
        debug!("get_table {dbname}.{tbl_name}");
        Ok(self
            .meta
            .get_table(dbname.to_owned(), tbl_name.to_owned())?)
    }

    /// Metastore listing of all table names in a database. Pure
    /// passthrough.
    pub fn get_all_tables(&mut self, dbname: &str) -> HiveResult<Vec<String>> {
        debug!("get_all_tables {dbname}");
        Ok(self.meta.get_all_tables(dbname.to_owned())?)
    }

    /// Session handle held for the adapter's lifetime.
    pub fn session_handle(&self) -> &TSessionHandle {
        &self.session
    }

    /// Whether a successful execute has stored a fetchable handle.
    pub fn has_active_execution(&self) -> bool {
        self.execution.is_active()
    }
}

/// Opens a session on a freshly connected query-engine client.
///
/// Any handshake failure is a construction failure and maps to
/// [`HiveError::Connection`], tagged with the endpoint it concerns.
fn negotiate_session(
    cli: &mut impl TCliServiceSyncClient,
    endpoint: &Endpoint,
) -> HiveResult<TSessionHandle> {
    let resp = cli
        .open_session(TOpenSessionReq::new(
            TProtocolVersion::HIVE_CLI_SERVICE_PROTOCOL_V1,
        ))
        .map_err(|e| HiveError::Connection(format!("{endpoint}: {e}")))?;
    if !is_success(&resp.status) {
        return Err(HiveError::Connection(format!(
            "{endpoint}: OpenSession rejected with status {:?}: {}",
            resp.status.status_code,
            resp.status.error_message.unwrap_or_default()
        )));
    }
    resp.session_handle.ok_or_else(|| {
        HiveError::Connection(format!("{endpoint}: OpenSession returned no session handle"))
    })
}

fn is_success(status: &TStatus) -> bool {
    status.status_code == TStatusCode::SUCCESS_STATUS
        || status.status_code == TStatusCode::SUCCESS_WITH_INFO_STATUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use hive_thrift::{
        MetaException, TExecuteStatementResp, TFetchResultsResp, THandleIdentifier,
        TOpenSessionResp, TOperationHandle, TOperationType, TRowSet, TStringValue, ThriftError,
    };

    fn ok_status() -> TStatus {
        TStatus {
            status_code: TStatusCode::SUCCESS_STATUS,
            info_messages: None,
            sql_state: None,
            error_code: None,
            error_message: None,
        }
    }

    fn error_status(code: i32, message: &str) -> TStatus {
        TStatus {
            status_code: TStatusCode::ERROR_STATUS,
            info_messages: None,
            sql_state: None,
            error_code: Some(code),
            error_message: Some(message.to_owned()),
        }
    }

    fn operation_handle(tag: u8) -> TOperationHandle {
        TOperationHandle {
            operation_id: THandleIdentifier {
                guid: vec![tag; 16],
                secret: vec![0; 16],
            },
            operation_type: TOperationType::EXECUTE_STATEMENT,
            has_result_set: true,
            modified_row_count: None,
        }
    }

    fn session_handle() -> TSessionHandle {
        TSessionHandle {
            session_id: THandleIdentifier {
                guid: vec![9; 16],
                secret: vec![9; 16],
            },
        }
    }

    fn string_row(values: &[&str]) -> TRow {
        TRow {
            col_vals: values
                .iter()
                .map(|v| {
                    TColumnValue::StringVal(TStringValue {
                        value: Some((*v).to_owned()),
                    })
                })
                .collect(),
        }
    }

    fn rows_resp(rows: Vec<TRow>) -> TFetchResultsResp {
        TFetchResultsResp {
            status: ok_status(),
            has_more_rows: None,
            results: Some(TRowSet {
                start_row_offset: 0,
                rows,
            }),
        }
    }

    /// CLI service that replays scripted responses and records the
    /// fetch requests it sees.
    #[derive(Default)]
    struct ScriptedCli {
        open_replies: VecDeque<TOpenSessionResp>,
        exec_replies: VecDeque<TExecuteStatementResp>,
        fetch_replies: VecDeque<TFetchResultsResp>,
        fetch_requests: Vec<TFetchResultsReq>,
    }

    impl TCliServiceSyncClient for ScriptedCli {
        fn open_session(
            &mut self,
            _req: TOpenSessionReq,
        ) -> Result<TOpenSessionResp, ThriftError> {
            Ok(self.open_replies.pop_front().unwrap_or(TOpenSessionResp {
                status: ok_status(),
                server_protocol_version: TProtocolVersion::HIVE_CLI_SERVICE_PROTOCOL_V1,
                session_handle: Some(session_handle()),
                configuration: None,
            }))
        }

        fn execute_statement(
            &mut self,
            _req: TExecuteStatementReq,
        ) -> Result<TExecuteStatementResp, ThriftError> {
            Ok(self
                .exec_replies
                .pop_front()
                .expect("unexpected execute_statement call"))
        }

        fn fetch_results(
            &mut self,
            req: TFetchResultsReq,
        ) -> Result<TFetchResultsResp, ThriftError> {
            self.fetch_requests.push(req);
            Ok(self
                .fetch_replies
                .pop_front()
                .expect("unexpected fetch_results call"))
        }
    }

    #[derive(Default)]
    struct ScriptedMeta {
        table: Option<Table>,
        table_names: Vec<String>,
        calls: Vec<String>,
    }

    impl TMetastoreSyncClient for ScriptedMeta {
        fn get_table(&mut self, dbname: String, tbl_name: String) -> Result<Table, ThriftError> {
            self.calls.push(format!("get_table {dbname}.{tbl_name}"));
            match self.table.clone() {
                Some(table) => Ok(table),
                None => Err(ThriftError::User(Box::new(MetaException {
                    message: Some(format!("{dbname}.{tbl_name} not found")),
                }))),
            }
        }

        fn get_all_tables(&mut self, db_name: String) -> Result<Vec<String>, ThriftError> {
            self.calls.push(format!("get_all_tables {db_name}"));
            Ok(self.table_names.clone())
        }
    }

    fn adapter(cli: ScriptedCli) -> HiveClient<ScriptedCli, ScriptedMeta> {
        HiveClient::new(cli, ScriptedMeta::default(), session_handle())
    }

    #[test]
    fn negotiate_session_returns_granted_handle() {
        let mut cli = ScriptedCli::default();
        let session = negotiate_session(&mut cli, &Endpoint::new("localhost", 10000)).unwrap();
        assert_eq!(session, session_handle());
    }

    #[test]
    fn rejected_open_session_is_a_connection_error() {
        let mut cli = ScriptedCli::default();
        cli.open_replies.push_back(TOpenSessionResp {
            status: error_status(8, "SASL negotiation failure"),
            server_protocol_version: TProtocolVersion::HIVE_CLI_SERVICE_PROTOCOL_V1,
            session_handle: None,
            configuration: None,
        });

        match negotiate_session(&mut cli, &Endpoint::new("localhost", 10000)) {
            Err(HiveError::Connection(message)) => {
                assert!(message.contains("localhost:10000"));
                assert!(message.contains("SASL negotiation failure"));
            }
            other => panic!("expected connection error, got {other:?}"),
        }
    }

    #[test]
    fn open_session_without_handle_is_a_connection_error() {
        let mut cli = ScriptedCli::default();
        cli.open_replies.push_back(TOpenSessionResp {
            status: ok_status(),
            server_protocol_version: TProtocolVersion::HIVE_CLI_SERVICE_PROTOCOL_V1,
            session_handle: None,
            configuration: None,
        });

        match negotiate_session(&mut cli, &Endpoint::new("localhost", 10000)) {
            Err(HiveError::Connection(message)) => {
                assert!(message.contains("no session handle"));
            }
            other => panic!("expected connection error, got {other:?}"),
        }
    }

    #[test]
    fn fetch_before_execute_is_a_state_error() {
        let mut hive = adapter(ScriptedCli::default());
        assert!(matches!(
            hive.fetch_one(),
            Err(HiveError::NoActiveExecution)
        ));
        assert!(matches!(
            hive.fetch_n(10),
            Err(HiveError::NoActiveExecution)
        ));
        assert!(matches!(
            hive.fetch_all(),
            Err(HiveError::NoActiveExecution)
        ));
    }

    #[test]
    fn execute_stores_handle_on_success() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: ok_status(),
            operation_handle: Some(operation_handle(1)),
        });
        cli.fetch_replies.push_back(rows_resp(vec![]));
        let mut hive = adapter(cli);

        hive.execute("SELECT 1").unwrap();
        assert!(hive.has_active_execution());

        hive.fetch_n(5).unwrap();
        let recorded = &hive.cli.fetch_requests[0];
        assert_eq!(recorded.operation_handle.operation_id.guid, vec![1; 16]);
    }

    #[test]
    fn execute_accepts_success_with_info() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: TStatus {
                status_code: TStatusCode::SUCCESS_WITH_INFO_STATUS,
                info_messages: Some(vec!["query has warnings".to_owned()]),
                sql_state: None,
                error_code: None,
                error_message: None,
            },
            operation_handle: Some(operation_handle(1)),
        });
        let mut hive = adapter(cli);

        hive.execute("SELECT 1").unwrap();
        assert!(hive.has_active_execution());
    }

    #[test]
    fn failed_execute_surfaces_server_code_and_message() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: error_status(40000, "ParseException line 1:0"),
            operation_handle: None,
        });
        let mut hive = adapter(cli);

        match hive.execute("SELEKT 1") {
            Err(HiveError::Execution { code, message }) => {
                assert_eq!(code, 40000);
                assert_eq!(message, "ParseException line 1:0");
            }
            other => panic!("expected execution error, got {other:?}"),
        }
        assert!(!hive.has_active_execution());
    }

    #[test]
    fn failed_execute_preserves_previous_handle() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: ok_status(),
            operation_handle: Some(operation_handle(1)),
        });
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: error_status(1, "boom"),
            operation_handle: None,
        });
        cli.fetch_replies
            .push_back(rows_resp(vec![string_row(&["a"])]));
        let mut hive = adapter(cli);

        hive.execute("SELECT 1").unwrap();
        assert!(hive.execute("SELEKT 2").is_err());

        // The first execution is still fetchable.
        assert!(hive.has_active_execution());
        let rows = hive.fetch_n(10).unwrap();
        assert_eq!(rows.len(), 1);
        let recorded = &hive.cli.fetch_requests[0];
        assert_eq!(recorded.operation_handle.operation_id.guid, vec![1; 16]);
    }

    #[test]
    fn second_execute_overwrites_handle() {
        let mut cli = ScriptedCli::default();
        for tag in [1, 2] {
            cli.exec_replies.push_back(TExecuteStatementResp {
                status: ok_status(),
                operation_handle: Some(operation_handle(tag)),
            });
        }
        cli.fetch_replies.push_back(rows_resp(vec![]));
        let mut hive = adapter(cli);

        hive.execute("SELECT 1").unwrap();
        hive.execute("SELECT 2").unwrap();
        hive.fetch_n(1).unwrap();
        let recorded = &hive.cli.fetch_requests[0];
        assert_eq!(recorded.operation_handle.operation_id.guid, vec![2; 16]);
    }

    #[test]
    fn execute_success_without_handle_is_a_protocol_error() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: ok_status(),
            operation_handle: None,
        });
        let mut hive = adapter(cli);

        assert!(matches!(
            hive.execute("SELECT 1"),
            Err(HiveError::Protocol(_))
        ));
        assert!(!hive.has_active_execution());
    }

    #[test]
    fn fetch_one_returns_first_column_of_first_row() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: ok_status(),
            operation_handle: Some(operation_handle(1)),
        });
        cli.fetch_replies
            .push_back(rows_resp(vec![string_row(&["x", "y", "z"])]));
        let mut hive = adapter(cli);

        hive.execute("SELECT * FROM t").unwrap();
        let value = hive.fetch_one().unwrap();
        assert_eq!(
            value,
            TColumnValue::StringVal(TStringValue {
                value: Some("x".to_owned())
            })
        );

        let recorded = &hive.cli.fetch_requests[0];
        assert_eq!(recorded.orientation, TFetchOrientation::FETCH_FIRST);
        assert_eq!(recorded.max_rows, 1);
    }

    #[test]
    fn fetch_one_on_empty_result_set_fails() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: ok_status(),
            operation_handle: Some(operation_handle(1)),
        });
        cli.fetch_replies.push_back(rows_resp(vec![]));
        let mut hive = adapter(cli);

        hive.execute("SELECT 1 WHERE false").unwrap();
        assert!(matches!(hive.fetch_one(), Err(HiveError::EmptyResult)));
    }

    #[test]
    fn fetch_n_returns_short_batch_without_error() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: ok_status(),
            operation_handle: Some(operation_handle(1)),
        });
        cli.fetch_replies.push_back(rows_resp(vec![
            string_row(&["1"]),
            string_row(&["2"]),
            string_row(&["3"]),
        ]));
        let mut hive = adapter(cli);

        hive.execute("SELECT * FROM small").unwrap();
        let rows = hive.fetch_n(10).unwrap();
        assert_eq!(rows.len(), 3);

        let recorded = &hive.cli.fetch_requests[0];
        assert_eq!(recorded.orientation, TFetchOrientation::FETCH_NEXT);
        assert_eq!(recorded.max_rows, 10);
    }

    #[test]
    fn fetch_n_with_missing_rowset_is_empty() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: ok_status(),
            operation_handle: Some(operation_handle(1)),
        });
        cli.fetch_replies.push_back(TFetchResultsResp {
            status: ok_status(),
            has_more_rows: Some(false),
            results: None,
        });
        let mut hive = adapter(cli);

        hive.execute("SELECT 1").unwrap();
        assert!(hive.fetch_n(10).unwrap().is_empty());
    }

    #[test]
    fn fetch_all_drains_batches_until_empty() {
        let mut cli = ScriptedCli::default();
        cli.exec_replies.push_back(TExecuteStatementResp {
            status: ok_status(),
            operation_handle: Some(operation_handle(1)),
        });
        let mut remaining: Vec<TRow> = (0..2500)
            .map(|i| string_row(&[i.to_string().as_str()]))
            .collect();
        cli.fetch_replies
            .push_back(rows_resp(remaining.drain(..1000).collect()));
        cli.fetch_replies
            .push_back(rows_resp(remaining.drain(..1000).collect()));
        // Short batch: the loop must keep going until an empty one.
        cli.fetch_replies.push_back(rows_resp(remaining));
        cli.fetch_replies.push_back(rows_resp(vec![]));
        let mut hive = adapter(cli);

        hive.execute("SELECT * FROM big").unwrap();
        let rows = hive.fetch_all().unwrap();

        assert_eq!(rows.len(), 2500);
        assert_eq!(
            rows[0].col_vals[0],
            TColumnValue::StringVal(TStringValue {
                value: Some("0".to_owned())
            })
        );
        assert_eq!(
            rows[2499].col_vals[0],
            TColumnValue::StringVal(TStringValue {
                value: Some("2499".to_owned())
            })
        );

        assert_eq!(hive.cli.fetch_requests.len(), 4);
        for recorded in &hive.cli.fetch_requests {
            assert_eq!(recorded.orientation, TFetchOrientation::FETCH_NEXT);
            assert_eq!(recorded.max_rows, 1000);
        }
    }

    #[test]
    fn metastore_lookups_pass_through() {
        let mut meta = ScriptedMeta::default();
        meta.table = Some(Table {
            table_name: Some("events".to_owned()),
            db_name: Some("default".to_owned()),
            ..Default::default()
        });
        meta.table_names = vec!["events".to_owned(), "users".to_owned()];
        let mut hive = HiveClient::new(ScriptedCli::default(), meta, session_handle());

        let table = hive.get_table("default", "events").unwrap();
        assert_eq!(table.table_name.as_deref(), Some("events"));

        let names = hive.get_all_tables("default").unwrap();
        assert_eq!(names, vec!["events", "users"]);

        assert_eq!(
            hive.meta.calls,
            vec!["get_table default.events", "get_all_tables default"]
        );
    }

    #[test]
    fn metastore_errors_propagate_unchanged() {
        let mut hive = HiveClient::new(
            ScriptedCli::default(),
            ScriptedMeta::default(),
            session_handle(),
        );

        match hive.get_table("default", "missing") {
            Err(HiveError::Thrift(ThriftError::User(err))) => {
                assert!(err.to_string().contains("default.missing"));
            }
            other => panic!("expected thrift user error, got {other:?}"),
        }
    }
}

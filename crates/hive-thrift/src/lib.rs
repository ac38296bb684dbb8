//! Hand-written Thrift stubs for the two Hive services the session
//! adapter talks to: HiveServer2's `TCLIService` (query execution) and
//! the Hive Metastore (catalog metadata).
//!
//! The stubs mirror the relevant slices of `TCLIService.thrift` and
//! `hive_metastore.thrift` exactly; only the calls the adapter issues
//! are modeled, and unknown fields are skipped on read so newer
//! servers keep working.

pub mod metastore;
pub mod tcli;

mod codec;

pub use metastore::{
    FieldSchema, MetaException, MetastoreSyncClient, NoSuchObjectException, Order, SerDeInfo,
    StorageDescriptor, TMetastoreSyncClient, Table,
};
pub use tcli::{
    CliServiceSyncClient, TBoolValue, TByteValue, TCliServiceSyncClient, TColumnValue,
    TDoubleValue, TExecuteStatementReq, TExecuteStatementResp, TFetchOrientation,
    TFetchResultsReq, TFetchResultsResp, THandleIdentifier, TI16Value, TI32Value, TI64Value,
    TOpenSessionReq, TOpenSessionResp, TOperationHandle, TOperationType, TProtocolVersion, TRow,
    TRowSet, TSessionHandle, TStatus, TStatusCode, TStringValue,
};

// Re-exported so crate consumers import everything from `hive_thrift::`
// and never drill into `thrift::protocol` or `thrift::transport`
// directly.
pub use thrift::protocol::{
    TBinaryInputProtocol, TBinaryOutputProtocol, TInputProtocol, TOutputProtocol,
};
pub use thrift::transport::{
    ReadHalf, TBufferedReadTransport, TBufferedWriteTransport, TIoChannel, TTcpChannel, WriteHalf,
};
pub use thrift::{Error as ThriftError, Result as ThriftResult};

//! Hand-written stubs for the subset of HiveServer2's `TCLIService`
//! that the session adapter uses: `OpenSession`, `ExecuteStatement`
//! and `FetchResults`.
//!
//! Struct layouts, field ids and enum values mirror
//! `TCLIService.thrift`; unknown fields are skipped on read so the
//! stubs stay compatible with servers that speak a newer revision of
//! the IDL.

use std::collections::BTreeMap;

use thrift::protocol::{
    field_id, verify_expected_message_type, verify_expected_sequence_number,
    verify_expected_service_call, verify_required_field_exists, TFieldIdentifier, TInputProtocol,
    TListIdentifier, TMessageIdentifier, TMessageType, TOutputProtocol, TStructIdentifier, TType,
};
use thrift::{ApplicationError, ApplicationErrorKind, ProtocolError, ProtocolErrorKind};

use crate::codec::{read_string_list, read_string_map, write_string_list, write_string_map};

//
// Enums
//
// Modeled as open i32 newtypes so values added by newer servers
// survive a round trip instead of failing to decode.
//

/// Protocol version requested at session open.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TProtocolVersion(pub i32);

impl TProtocolVersion {
    pub const HIVE_CLI_SERVICE_PROTOCOL_V1: TProtocolVersion = TProtocolVersion(0);

    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        Ok(TProtocolVersion(i_prot.read_i32()?))
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_i32(self.0)
    }
}

/// Status of a completed service call.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TStatusCode(pub i32);

impl TStatusCode {
    pub const SUCCESS_STATUS: TStatusCode = TStatusCode(0);
    pub const SUCCESS_WITH_INFO_STATUS: TStatusCode = TStatusCode(1);
    pub const STILL_EXECUTING_STATUS: TStatusCode = TStatusCode(2);
    pub const ERROR_STATUS: TStatusCode = TStatusCode(3);
    pub const INVALID_HANDLE_STATUS: TStatusCode = TStatusCode(4);

    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        Ok(TStatusCode(i_prot.read_i32()?))
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_i32(self.0)
    }
}

/// Kind of operation an operation handle refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TOperationType(pub i32);

impl TOperationType {
    pub const EXECUTE_STATEMENT: TOperationType = TOperationType(0);
    pub const GET_TYPE_INFO: TOperationType = TOperationType(1);
    pub const GET_CATALOGS: TOperationType = TOperationType(2);
    pub const GET_SCHEMAS: TOperationType = TOperationType(3);
    pub const GET_TABLES: TOperationType = TOperationType(4);
    pub const GET_TABLE_TYPES: TOperationType = TOperationType(5);
    pub const GET_COLUMNS: TOperationType = TOperationType(6);
    pub const GET_FUNCTIONS: TOperationType = TOperationType(7);
    pub const UNKNOWN: TOperationType = TOperationType(8);

    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        Ok(TOperationType(i_prot.read_i32()?))
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_i32(self.0)
    }
}

/// Cursor positioning mode for `FetchResults`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TFetchOrientation(pub i32);

impl TFetchOrientation {
    pub const FETCH_NEXT: TFetchOrientation = TFetchOrientation(0);
    pub const FETCH_PRIOR: TFetchOrientation = TFetchOrientation(1);
    pub const FETCH_RELATIVE: TFetchOrientation = TFetchOrientation(2);
    pub const FETCH_ABSOLUTE: TFetchOrientation = TFetchOrientation(3);
    pub const FETCH_FIRST: TFetchOrientation = TFetchOrientation(4);
    pub const FETCH_LAST: TFetchOrientation = TFetchOrientation(5);

    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        Ok(TFetchOrientation(i_prot.read_i32()?))
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_i32(self.0)
    }
}

//
// Status and handles
//

/// Result status attached to every response.
#[derive(Clone, Debug, PartialEq)]
pub struct TStatus {
    pub status_code: TStatusCode,
    pub info_messages: Option<Vec<String>>,
    pub sql_state: Option<String>,
    pub error_code: Option<i32>,
    pub error_message: Option<String>,
}

impl TStatus {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_status_code: Option<TStatusCode> = None;
        let mut f_info_messages: Option<Vec<String>> = None;
        let mut f_sql_state: Option<String> = None;
        let mut f_error_code: Option<i32> = None;
        let mut f_error_message: Option<String> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_status_code = Some(TStatusCode::read_from_in_protocol(i_prot)?),
                2 => f_info_messages = Some(read_string_list(i_prot)?),
                3 => f_sql_state = Some(i_prot.read_string()?),
                4 => f_error_code = Some(i_prot.read_i32()?),
                5 => f_error_message = Some(i_prot.read_string()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TStatus.status_code", &f_status_code)?;
        Ok(TStatus {
            status_code: f_status_code.expect("required field verified above"),
            info_messages: f_info_messages,
            sql_state: f_sql_state,
            error_code: f_error_code,
            error_message: f_error_message,
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TStatus"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("statusCode", TType::I32, 1))?;
        self.status_code.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        if let Some(ref messages) = self.info_messages {
            o_prot.write_field_begin(&TFieldIdentifier::new("infoMessages", TType::List, 2))?;
            write_string_list(o_prot, messages)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref sql_state) = self.sql_state {
            o_prot.write_field_begin(&TFieldIdentifier::new("sqlState", TType::String, 3))?;
            o_prot.write_string(sql_state)?;
            o_prot.write_field_end()?;
        }
        if let Some(error_code) = self.error_code {
            o_prot.write_field_begin(&TFieldIdentifier::new("errorCode", TType::I32, 4))?;
            o_prot.write_i32(error_code)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref error_message) = self.error_message {
            o_prot.write_field_begin(&TFieldIdentifier::new("errorMessage", TType::String, 5))?;
            o_prot.write_string(error_message)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// Server-issued identifier, opaque to the client.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct THandleIdentifier {
    pub guid: Vec<u8>,
    pub secret: Vec<u8>,
}

impl THandleIdentifier {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_guid: Option<Vec<u8>> = None;
        let mut f_secret: Option<Vec<u8>> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_guid = Some(i_prot.read_bytes()?),
                2 => f_secret = Some(i_prot.read_bytes()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("THandleIdentifier.guid", &f_guid)?;
        verify_required_field_exists("THandleIdentifier.secret", &f_secret)?;
        Ok(THandleIdentifier {
            guid: f_guid.expect("required field verified above"),
            secret: f_secret.expect("required field verified above"),
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("THandleIdentifier"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("guid", TType::String, 1))?;
        o_prot.write_bytes(&self.guid)?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("secret", TType::String, 2))?;
        o_prot.write_bytes(&self.secret)?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// Capability token for an open session. Returned by `OpenSession`
/// and passed back verbatim on every statement submission.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct TSessionHandle {
    pub session_id: THandleIdentifier,
}

impl TSessionHandle {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_session_id: Option<THandleIdentifier> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_session_id = Some(THandleIdentifier::read_from_in_protocol(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TSessionHandle.session_id", &f_session_id)?;
        Ok(TSessionHandle {
            session_id: f_session_id.expect("required field verified above"),
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TSessionHandle"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("sessionId", TType::Struct, 1))?;
        self.session_id.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// Capability token for one submitted query's result set.
#[derive(Clone, Debug, PartialEq)]
pub struct TOperationHandle {
    pub operation_id: THandleIdentifier,
    pub operation_type: TOperationType,
    pub has_result_set: bool,
    pub modified_row_count: Option<f64>,
}

impl TOperationHandle {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_operation_id: Option<THandleIdentifier> = None;
        let mut f_operation_type: Option<TOperationType> = None;
        let mut f_has_result_set: Option<bool> = None;
        let mut f_modified_row_count: Option<f64> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_operation_id = Some(THandleIdentifier::read_from_in_protocol(i_prot)?),
                2 => f_operation_type = Some(TOperationType::read_from_in_protocol(i_prot)?),
                3 => f_has_result_set = Some(i_prot.read_bool()?),
                4 => f_modified_row_count = Some(i_prot.read_double()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TOperationHandle.operation_id", &f_operation_id)?;
        verify_required_field_exists("TOperationHandle.operation_type", &f_operation_type)?;
        verify_required_field_exists("TOperationHandle.has_result_set", &f_has_result_set)?;
        Ok(TOperationHandle {
            operation_id: f_operation_id.expect("required field verified above"),
            operation_type: f_operation_type.expect("required field verified above"),
            has_result_set: f_has_result_set.expect("required field verified above"),
            modified_row_count: f_modified_row_count,
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TOperationHandle"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("operationId", TType::Struct, 1))?;
        self.operation_id.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("operationType", TType::I32, 2))?;
        self.operation_type.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("hasResultSet", TType::Bool, 3))?;
        o_prot.write_bool(self.has_result_set)?;
        o_prot.write_field_end()?;
        if let Some(count) = self.modified_row_count {
            o_prot.write_field_begin(&TFieldIdentifier::new("modifiedRowCount", TType::Double, 4))?;
            o_prot.write_double(count)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

//
// Column values and rows
//

macro_rules! value_wrapper {
    ($name:ident, $rust_ty:ty, $ttype:expr, $read:ident, $write:ident) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        pub struct $name {
            pub value: Option<$rust_ty>,
        }

        impl $name {
            pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
                let mut value = None;
                i_prot.read_struct_begin()?;
                loop {
                    let field_ident = i_prot.read_field_begin()?;
                    if field_ident.field_type == TType::Stop {
                        break;
                    }
                    match field_id(&field_ident)? {
                        1 => value = Some(i_prot.$read()?),
                        _ => i_prot.skip(field_ident.field_type)?,
                    }
                    i_prot.read_field_end()?;
                }
                i_prot.read_struct_end()?;
                Ok($name { value })
            }

            pub fn write_to_out_protocol(
                &self,
                o_prot: &mut dyn TOutputProtocol,
            ) -> thrift::Result<()> {
                o_prot.write_struct_begin(&TStructIdentifier::new(stringify!($name)))?;
                if let Some(value) = self.value {
                    o_prot.write_field_begin(&TFieldIdentifier::new("value", $ttype, 1))?;
                    o_prot.$write(value)?;
                    o_prot.write_field_end()?;
                }
                o_prot.write_field_stop()?;
                o_prot.write_struct_end()
            }
        }
    };
}

value_wrapper!(TBoolValue, bool, TType::Bool, read_bool, write_bool);
value_wrapper!(TByteValue, i8, TType::I08, read_i8, write_i8);
value_wrapper!(TI16Value, i16, TType::I16, read_i16, write_i16);
value_wrapper!(TI32Value, i32, TType::I32, read_i32, write_i32);
value_wrapper!(TI64Value, i64, TType::I64, read_i64, write_i64);
value_wrapper!(TDoubleValue, f64, TType::Double, read_double, write_double);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TStringValue {
    pub value: Option<String>,
}

impl TStringValue {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut value = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => value = Some(i_prot.read_string()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(TStringValue { value })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TStringValue"))?;
        if let Some(ref value) = self.value {
            o_prot.write_field_begin(&TFieldIdentifier::new("value", TType::String, 1))?;
            o_prot.write_string(value)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// One column value inside a row. Thrift union: exactly one variant
/// is set on the wire.
#[derive(Clone, Debug, PartialEq)]
pub enum TColumnValue {
    BoolVal(TBoolValue),
    ByteVal(TByteValue),
    I16Val(TI16Value),
    I32Val(TI32Value),
    I64Val(TI64Value),
    DoubleVal(TDoubleValue),
    StringVal(TStringValue),
}

impl TColumnValue {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut ret: Option<TColumnValue> = None;
        let mut received_field_count = 0;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => {
                    let val = TBoolValue::read_from_in_protocol(i_prot)?;
                    ret.get_or_insert(TColumnValue::BoolVal(val));
                }
                2 => {
                    let val = TByteValue::read_from_in_protocol(i_prot)?;
                    ret.get_or_insert(TColumnValue::ByteVal(val));
                }
                3 => {
                    let val = TI16Value::read_from_in_protocol(i_prot)?;
                    ret.get_or_insert(TColumnValue::I16Val(val));
                }
                4 => {
                    let val = TI32Value::read_from_in_protocol(i_prot)?;
                    ret.get_or_insert(TColumnValue::I32Val(val));
                }
                5 => {
                    let val = TI64Value::read_from_in_protocol(i_prot)?;
                    ret.get_or_insert(TColumnValue::I64Val(val));
                }
                6 => {
                    let val = TDoubleValue::read_from_in_protocol(i_prot)?;
                    ret.get_or_insert(TColumnValue::DoubleVal(val));
                }
                7 => {
                    let val = TStringValue::read_from_in_protocol(i_prot)?;
                    ret.get_or_insert(TColumnValue::StringVal(val));
                }
                _ => i_prot.skip(field_ident.field_type)?,
            }
            received_field_count += 1;
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        if received_field_count > 1 {
            return Err(thrift::Error::Protocol(ProtocolError::new(
                ProtocolErrorKind::InvalidData,
                "received multiple fields for union TColumnValue".to_owned(),
            )));
        }
        ret.ok_or_else(|| {
            thrift::Error::Protocol(ProtocolError::new(
                ProtocolErrorKind::InvalidData,
                "received empty union TColumnValue".to_owned(),
            ))
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TColumnValue"))?;
        let (name, id) = match self {
            TColumnValue::BoolVal(_) => ("boolVal", 1),
            TColumnValue::ByteVal(_) => ("byteVal", 2),
            TColumnValue::I16Val(_) => ("i16Val", 3),
            TColumnValue::I32Val(_) => ("i32Val", 4),
            TColumnValue::I64Val(_) => ("i64Val", 5),
            TColumnValue::DoubleVal(_) => ("doubleVal", 6),
            TColumnValue::StringVal(_) => ("stringVal", 7),
        };
        o_prot.write_field_begin(&TFieldIdentifier::new(name, TType::Struct, id))?;
        match self {
            TColumnValue::BoolVal(val) => val.write_to_out_protocol(o_prot)?,
            TColumnValue::ByteVal(val) => val.write_to_out_protocol(o_prot)?,
            TColumnValue::I16Val(val) => val.write_to_out_protocol(o_prot)?,
            TColumnValue::I32Val(val) => val.write_to_out_protocol(o_prot)?,
            TColumnValue::I64Val(val) => val.write_to_out_protocol(o_prot)?,
            TColumnValue::DoubleVal(val) => val.write_to_out_protocol(o_prot)?,
            TColumnValue::StringVal(val) => val.write_to_out_protocol(o_prot)?,
        }
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// One result row: an ordered sequence of column values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TRow {
    pub col_vals: Vec<TColumnValue>,
}

impl TRow {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_col_vals: Option<Vec<TColumnValue>> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => {
                    let list_ident = i_prot.read_list_begin()?;
                    let mut vals = Vec::with_capacity(list_ident.size.max(0) as usize);
                    for _ in 0..list_ident.size {
                        vals.push(TColumnValue::read_from_in_protocol(i_prot)?);
                    }
                    i_prot.read_list_end()?;
                    f_col_vals = Some(vals);
                }
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TRow.col_vals", &f_col_vals)?;
        Ok(TRow {
            col_vals: f_col_vals.expect("required field verified above"),
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TRow"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("colVals", TType::List, 1))?;
        o_prot.write_list_begin(&TListIdentifier::new(TType::Struct, self.col_vals.len() as i32))?;
        for val in &self.col_vals {
            val.write_to_out_protocol(o_prot)?;
        }
        o_prot.write_list_end()?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// Batch of rows returned by one `FetchResults` call.
///
/// Column-oriented results (field 3, protocol V6+) are skipped on
/// read: this is a protocol V1 client and only row-oriented results
/// are modeled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TRowSet {
    pub start_row_offset: i64,
    pub rows: Vec<TRow>,
}

impl TRowSet {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_start_row_offset: Option<i64> = None;
        let mut f_rows: Option<Vec<TRow>> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_start_row_offset = Some(i_prot.read_i64()?),
                2 => {
                    let list_ident = i_prot.read_list_begin()?;
                    let mut rows = Vec::with_capacity(list_ident.size.max(0) as usize);
                    for _ in 0..list_ident.size {
                        rows.push(TRow::read_from_in_protocol(i_prot)?);
                    }
                    i_prot.read_list_end()?;
                    f_rows = Some(rows);
                }
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TRowSet.start_row_offset", &f_start_row_offset)?;
        verify_required_field_exists("TRowSet.rows", &f_rows)?;
        Ok(TRowSet {
            start_row_offset: f_start_row_offset.expect("required field verified above"),
            rows: f_rows.expect("required field verified above"),
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TRowSet"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("startRowOffset", TType::I64, 1))?;
        o_prot.write_i64(self.start_row_offset)?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("rows", TType::List, 2))?;
        o_prot.write_list_begin(&TListIdentifier::new(TType::Struct, self.rows.len() as i32))?;
        for row in &self.rows {
            row.write_to_out_protocol(o_prot)?;
        }
        o_prot.write_list_end()?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

//
// Request/response structs
//

#[derive(Clone, Debug, PartialEq)]
pub struct TOpenSessionReq {
    pub client_protocol: TProtocolVersion,
    pub username: Option<String>,
    pub password: Option<String>,
    pub configuration: Option<BTreeMap<String, String>>,
}

impl TOpenSessionReq {
    pub fn new(client_protocol: TProtocolVersion) -> Self {
        TOpenSessionReq {
            client_protocol,
            username: None,
            password: None,
            configuration: None,
        }
    }

    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_client_protocol: Option<TProtocolVersion> = None;
        let mut f_username: Option<String> = None;
        let mut f_password: Option<String> = None;
        let mut f_configuration: Option<BTreeMap<String, String>> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_client_protocol = Some(TProtocolVersion::read_from_in_protocol(i_prot)?),
                2 => f_username = Some(i_prot.read_string()?),
                3 => f_password = Some(i_prot.read_string()?),
                4 => f_configuration = Some(read_string_map(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TOpenSessionReq.client_protocol", &f_client_protocol)?;
        Ok(TOpenSessionReq {
            client_protocol: f_client_protocol.expect("required field verified above"),
            username: f_username,
            password: f_password,
            configuration: f_configuration,
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TOpenSessionReq"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("client_protocol", TType::I32, 1))?;
        self.client_protocol.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        if let Some(ref username) = self.username {
            o_prot.write_field_begin(&TFieldIdentifier::new("username", TType::String, 2))?;
            o_prot.write_string(username)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref password) = self.password {
            o_prot.write_field_begin(&TFieldIdentifier::new("password", TType::String, 3))?;
            o_prot.write_string(password)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref configuration) = self.configuration {
            o_prot.write_field_begin(&TFieldIdentifier::new("configuration", TType::Map, 4))?;
            write_string_map(o_prot, configuration)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TOpenSessionResp {
    pub status: TStatus,
    pub server_protocol_version: TProtocolVersion,
    pub session_handle: Option<TSessionHandle>,
    pub configuration: Option<BTreeMap<String, String>>,
}

impl TOpenSessionResp {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_status: Option<TStatus> = None;
        let mut f_server_protocol_version: Option<TProtocolVersion> = None;
        let mut f_session_handle: Option<TSessionHandle> = None;
        let mut f_configuration: Option<BTreeMap<String, String>> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_status = Some(TStatus::read_from_in_protocol(i_prot)?),
                2 => {
                    f_server_protocol_version =
                        Some(TProtocolVersion::read_from_in_protocol(i_prot)?)
                }
                3 => f_session_handle = Some(TSessionHandle::read_from_in_protocol(i_prot)?),
                4 => f_configuration = Some(read_string_map(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TOpenSessionResp.status", &f_status)?;
        verify_required_field_exists(
            "TOpenSessionResp.server_protocol_version",
            &f_server_protocol_version,
        )?;
        Ok(TOpenSessionResp {
            status: f_status.expect("required field verified above"),
            server_protocol_version: f_server_protocol_version
                .expect("required field verified above"),
            session_handle: f_session_handle,
            configuration: f_configuration,
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TOpenSessionResp"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("status", TType::Struct, 1))?;
        self.status.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("serverProtocolVersion", TType::I32, 2))?;
        self.server_protocol_version.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        if let Some(ref handle) = self.session_handle {
            o_prot.write_field_begin(&TFieldIdentifier::new("sessionHandle", TType::Struct, 3))?;
            handle.write_to_out_protocol(o_prot)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref configuration) = self.configuration {
            o_prot.write_field_begin(&TFieldIdentifier::new("configuration", TType::Map, 4))?;
            write_string_map(o_prot, configuration)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TExecuteStatementReq {
    pub session_handle: TSessionHandle,
    pub statement: String,
    pub conf_overlay: Option<BTreeMap<String, String>>,
    pub run_async: Option<bool>,
}

impl TExecuteStatementReq {
    pub fn new(session_handle: TSessionHandle, statement: impl Into<String>) -> Self {
        TExecuteStatementReq {
            session_handle,
            statement: statement.into(),
            conf_overlay: None,
            run_async: None,
        }
    }

    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_session_handle: Option<TSessionHandle> = None;
        let mut f_statement: Option<String> = None;
        let mut f_conf_overlay: Option<BTreeMap<String, String>> = None;
        let mut f_run_async: Option<bool> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_session_handle = Some(TSessionHandle::read_from_in_protocol(i_prot)?),
                2 => f_statement = Some(i_prot.read_string()?),
                3 => f_conf_overlay = Some(read_string_map(i_prot)?),
                4 => f_run_async = Some(i_prot.read_bool()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TExecuteStatementReq.session_handle", &f_session_handle)?;
        verify_required_field_exists("TExecuteStatementReq.statement", &f_statement)?;
        Ok(TExecuteStatementReq {
            session_handle: f_session_handle.expect("required field verified above"),
            statement: f_statement.expect("required field verified above"),
            conf_overlay: f_conf_overlay,
            run_async: f_run_async,
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TExecuteStatementReq"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("sessionHandle", TType::Struct, 1))?;
        self.session_handle.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("statement", TType::String, 2))?;
        o_prot.write_string(&self.statement)?;
        o_prot.write_field_end()?;
        if let Some(ref overlay) = self.conf_overlay {
            o_prot.write_field_begin(&TFieldIdentifier::new("confOverlay", TType::Map, 3))?;
            write_string_map(o_prot, overlay)?;
            o_prot.write_field_end()?;
        }
        if let Some(run_async) = self.run_async {
            o_prot.write_field_begin(&TFieldIdentifier::new("runAsync", TType::Bool, 4))?;
            o_prot.write_bool(run_async)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TExecuteStatementResp {
    pub status: TStatus,
    pub operation_handle: Option<TOperationHandle>,
}

impl TExecuteStatementResp {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_status: Option<TStatus> = None;
        let mut f_operation_handle: Option<TOperationHandle> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_status = Some(TStatus::read_from_in_protocol(i_prot)?),
                2 => f_operation_handle = Some(TOperationHandle::read_from_in_protocol(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TExecuteStatementResp.status", &f_status)?;
        Ok(TExecuteStatementResp {
            status: f_status.expect("required field verified above"),
            operation_handle: f_operation_handle,
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TExecuteStatementResp"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("status", TType::Struct, 1))?;
        self.status.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        if let Some(ref handle) = self.operation_handle {
            o_prot.write_field_begin(&TFieldIdentifier::new("operationHandle", TType::Struct, 2))?;
            handle.write_to_out_protocol(o_prot)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TFetchResultsReq {
    pub operation_handle: TOperationHandle,
    pub orientation: TFetchOrientation,
    pub max_rows: i64,
}

impl TFetchResultsReq {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_operation_handle: Option<TOperationHandle> = None;
        let mut f_orientation: Option<TFetchOrientation> = None;
        let mut f_max_rows: Option<i64> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_operation_handle = Some(TOperationHandle::read_from_in_protocol(i_prot)?),
                2 => f_orientation = Some(TFetchOrientation::read_from_in_protocol(i_prot)?),
                3 => f_max_rows = Some(i_prot.read_i64()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TFetchResultsReq.operation_handle", &f_operation_handle)?;
        verify_required_field_exists("TFetchResultsReq.orientation", &f_orientation)?;
        verify_required_field_exists("TFetchResultsReq.max_rows", &f_max_rows)?;
        Ok(TFetchResultsReq {
            operation_handle: f_operation_handle.expect("required field verified above"),
            orientation: f_orientation.expect("required field verified above"),
            max_rows: f_max_rows.expect("required field verified above"),
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TFetchResultsReq"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("operationHandle", TType::Struct, 1))?;
        self.operation_handle.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("orientation", TType::I32, 2))?;
        self.orientation.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("maxRows", TType::I64, 3))?;
        o_prot.write_i64(self.max_rows)?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TFetchResultsResp {
    pub status: TStatus,
    pub has_more_rows: Option<bool>,
    pub results: Option<TRowSet>,
}

impl TFetchResultsResp {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut f_status: Option<TStatus> = None;
        let mut f_has_more_rows: Option<bool> = None;
        let mut f_results: Option<TRowSet> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => f_status = Some(TStatus::read_from_in_protocol(i_prot)?),
                2 => f_has_more_rows = Some(i_prot.read_bool()?),
                3 => f_results = Some(TRowSet::read_from_in_protocol(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        verify_required_field_exists("TFetchResultsResp.status", &f_status)?;
        Ok(TFetchResultsResp {
            status: f_status.expect("required field verified above"),
            has_more_rows: f_has_more_rows,
            results: f_results,
        })
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("TFetchResultsResp"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("status", TType::Struct, 1))?;
        self.status.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        if let Some(has_more_rows) = self.has_more_rows {
            o_prot.write_field_begin(&TFieldIdentifier::new("hasMoreRows", TType::Bool, 2))?;
            o_prot.write_bool(has_more_rows)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref results) = self.results {
            o_prot.write_field_begin(&TFieldIdentifier::new("results", TType::Struct, 3))?;
            results.write_to_out_protocol(o_prot)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

//
// Service client
//

/// Client-side view of the three `TCLIService` calls the adapter uses.
///
/// The trait is the seam for exercising adapter logic against scripted
/// responses instead of a live server.
pub trait TCliServiceSyncClient {
    fn open_session(&mut self, req: TOpenSessionReq) -> thrift::Result<TOpenSessionResp>;
    fn execute_statement(
        &mut self,
        req: TExecuteStatementReq,
    ) -> thrift::Result<TExecuteStatementResp>;
    fn fetch_results(&mut self, req: TFetchResultsReq) -> thrift::Result<TFetchResultsResp>;
}

/// Synchronous `TCLIService` client over a Thrift protocol pair.
pub struct CliServiceSyncClient<IP: TInputProtocol, OP: TOutputProtocol> {
    i_prot: IP,
    o_prot: OP,
    sequence_number: i32,
}

impl<IP: TInputProtocol, OP: TOutputProtocol> CliServiceSyncClient<IP, OP> {
    pub fn new(input_protocol: IP, output_protocol: OP) -> Self {
        CliServiceSyncClient {
            i_prot: input_protocol,
            o_prot: output_protocol,
            sequence_number: 0,
        }
    }

    /// Reads the reply envelope, decoding server-side exceptions.
    fn read_reply_envelope(&mut self, call: &str) -> thrift::Result<()> {
        let message_ident = self.i_prot.read_message_begin()?;
        verify_expected_sequence_number(self.sequence_number, message_ident.sequence_number)?;
        verify_expected_service_call(call, &message_ident.name)?;
        if message_ident.message_type == TMessageType::Exception {
            let remote_error =
                thrift::Error::read_application_error_from_in_protocol(&mut self.i_prot)?;
            self.i_prot.read_message_end()?;
            return Err(thrift::Error::Application(remote_error));
        }
        verify_expected_message_type(TMessageType::Reply, message_ident.message_type)?;
        Ok(())
    }
}

impl<IP: TInputProtocol, OP: TOutputProtocol> TCliServiceSyncClient
    for CliServiceSyncClient<IP, OP>
{
    fn open_session(&mut self, req: TOpenSessionReq) -> thrift::Result<TOpenSessionResp> {
        self.sequence_number += 1;
        let message_ident =
            TMessageIdentifier::new("OpenSession", TMessageType::Call, self.sequence_number);
        self.o_prot.write_message_begin(&message_ident)?;
        let call_args = OpenSessionArgs { req };
        call_args.write_to_out_protocol(&mut self.o_prot)?;
        self.o_prot.write_message_end()?;
        self.o_prot.flush()?;
        self.read_reply_envelope("OpenSession")?;
        let result = OpenSessionResult::read_from_in_protocol(&mut self.i_prot)?;
        self.i_prot.read_message_end()?;
        result.ok_or()
    }

    fn execute_statement(
        &mut self,
        req: TExecuteStatementReq,
    ) -> thrift::Result<TExecuteStatementResp> {
        self.sequence_number += 1;
        let message_ident =
            TMessageIdentifier::new("ExecuteStatement", TMessageType::Call, self.sequence_number);
        self.o_prot.write_message_begin(&message_ident)?;
        let call_args = ExecuteStatementArgs { req };
        call_args.write_to_out_protocol(&mut self.o_prot)?;
        self.o_prot.write_message_end()?;
        self.o_prot.flush()?;
        self.read_reply_envelope("ExecuteStatement")?;
        let result = ExecuteStatementResult::read_from_in_protocol(&mut self.i_prot)?;
        self.i_prot.read_message_end()?;
        result.ok_or()
    }

    fn fetch_results(&mut self, req: TFetchResultsReq) -> thrift::Result<TFetchResultsResp> {
        self.sequence_number += 1;
        let message_ident =
            TMessageIdentifier::new("FetchResults", TMessageType::Call, self.sequence_number);
        self.o_prot.write_message_begin(&message_ident)?;
        let call_args = FetchResultsArgs { req };
        call_args.write_to_out_protocol(&mut self.o_prot)?;
        self.o_prot.write_message_end()?;
        self.o_prot.flush()?;
        self.read_reply_envelope("FetchResults")?;
        let result = FetchResultsResult::read_from_in_protocol(&mut self.i_prot)?;
        self.i_prot.read_message_end()?;
        result.ok_or()
    }
}

fn missing_result(call: &str) -> thrift::Error {
    thrift::Error::Application(ApplicationError::new(
        ApplicationErrorKind::MissingResult,
        format!("no result received for {call} call"),
    ))
}

struct OpenSessionArgs {
    req: TOpenSessionReq,
}

impl OpenSessionArgs {
    fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("OpenSession_args"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("req", TType::Struct, 1))?;
        self.req.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

struct OpenSessionResult {
    result_value: Option<TOpenSessionResp>,
}

impl OpenSessionResult {
    fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut result_value: Option<TOpenSessionResp> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                0 => result_value = Some(TOpenSessionResp::read_from_in_protocol(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(OpenSessionResult { result_value })
    }

    fn ok_or(self) -> thrift::Result<TOpenSessionResp> {
        self.result_value.ok_or_else(|| missing_result("OpenSession"))
    }
}

struct ExecuteStatementArgs {
    req: TExecuteStatementReq,
}

impl ExecuteStatementArgs {
    fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("ExecuteStatement_args"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("req", TType::Struct, 1))?;
        self.req.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

struct ExecuteStatementResult {
    result_value: Option<TExecuteStatementResp>,
}

impl ExecuteStatementResult {
    fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut result_value: Option<TExecuteStatementResp> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                0 => result_value = Some(TExecuteStatementResp::read_from_in_protocol(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(ExecuteStatementResult { result_value })
    }

    fn ok_or(self) -> thrift::Result<TExecuteStatementResp> {
        self.result_value
            .ok_or_else(|| missing_result("ExecuteStatement"))
    }
}

struct FetchResultsArgs {
    req: TFetchResultsReq,
}

impl FetchResultsArgs {
    fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("FetchResults_args"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("req", TType::Struct, 1))?;
        self.req.write_to_out_protocol(o_prot)?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

struct FetchResultsResult {
    result_value: Option<TFetchResultsResp>,
}

impl FetchResultsResult {
    fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut result_value: Option<TFetchResultsResp> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                0 => result_value = Some(TFetchResultsResp::read_from_in_protocol(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(FetchResultsResult { result_value })
    }

    fn ok_or(self) -> thrift::Result<TFetchResultsResp> {
        self.result_value
            .ok_or_else(|| missing_result("FetchResults"))
    }
}

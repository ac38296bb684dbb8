//! Hand-written stubs for the slice of the Hive Metastore service the
//! adapter passes through: `get_table` and `get_all_tables`.
//!
//! Field ids mirror `hive_metastore.thrift`. The metastore models most
//! fields with default requiredness, so everything decodes to `Option`
//! and fields this client does not use (privileges, skew info) are
//! skipped on read.

use std::collections::BTreeMap;
use std::fmt;

use thrift::protocol::{
    field_id, verify_expected_message_type, verify_expected_sequence_number,
    verify_expected_service_call, TFieldIdentifier, TInputProtocol, TListIdentifier,
    TMessageIdentifier, TMessageType, TOutputProtocol, TStructIdentifier, TType,
};
use thrift::{ApplicationError, ApplicationErrorKind};

use crate::codec::{read_string_list, read_string_map, write_string_list, write_string_map};

/// Name, type and comment of one column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSchema {
    pub name: Option<String>,
    pub type_: Option<String>,
    pub comment: Option<String>,
}

impl FieldSchema {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut schema = FieldSchema::default();
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => schema.name = Some(i_prot.read_string()?),
                2 => schema.type_ = Some(i_prot.read_string()?),
                3 => schema.comment = Some(i_prot.read_string()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(schema)
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("FieldSchema"))?;
        write_optional_string(o_prot, "name", 1, &self.name)?;
        write_optional_string(o_prot, "type", 2, &self.type_)?;
        write_optional_string(o_prot, "comment", 3, &self.comment)?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// Sort order of a bucketed column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Order {
    pub col: Option<String>,
    pub order: Option<i32>,
}

impl Order {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut order = Order::default();
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => order.col = Some(i_prot.read_string()?),
                2 => order.order = Some(i_prot.read_i32()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(order)
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("Order"))?;
        write_optional_string(o_prot, "col", 1, &self.col)?;
        if let Some(order) = self.order {
            o_prot.write_field_begin(&TFieldIdentifier::new("order", TType::I32, 2))?;
            o_prot.write_i32(order)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// Serializer/deserializer binding of a storage descriptor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SerDeInfo {
    pub name: Option<String>,
    pub serialization_lib: Option<String>,
    pub parameters: Option<BTreeMap<String, String>>,
}

impl SerDeInfo {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut info = SerDeInfo::default();
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => info.name = Some(i_prot.read_string()?),
                2 => info.serialization_lib = Some(i_prot.read_string()?),
                3 => info.parameters = Some(read_string_map(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(info)
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("SerDeInfo"))?;
        write_optional_string(o_prot, "name", 1, &self.name)?;
        write_optional_string(o_prot, "serializationLib", 2, &self.serialization_lib)?;
        if let Some(ref parameters) = self.parameters {
            o_prot.write_field_begin(&TFieldIdentifier::new("parameters", TType::Map, 3))?;
            write_string_map(o_prot, parameters)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// Physical layout of a table: columns, location, formats.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StorageDescriptor {
    pub cols: Option<Vec<FieldSchema>>,
    pub location: Option<String>,
    pub input_format: Option<String>,
    pub output_format: Option<String>,
    pub compressed: Option<bool>,
    pub num_buckets: Option<i32>,
    pub serde_info: Option<SerDeInfo>,
    pub bucket_cols: Option<Vec<String>>,
    pub sort_cols: Option<Vec<Order>>,
    pub parameters: Option<BTreeMap<String, String>>,
}

impl StorageDescriptor {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut sd = StorageDescriptor::default();
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => sd.cols = Some(read_struct_list(i_prot, FieldSchema::read_from_in_protocol)?),
                2 => sd.location = Some(i_prot.read_string()?),
                3 => sd.input_format = Some(i_prot.read_string()?),
                4 => sd.output_format = Some(i_prot.read_string()?),
                5 => sd.compressed = Some(i_prot.read_bool()?),
                6 => sd.num_buckets = Some(i_prot.read_i32()?),
                7 => sd.serde_info = Some(SerDeInfo::read_from_in_protocol(i_prot)?),
                8 => sd.bucket_cols = Some(read_string_list(i_prot)?),
                9 => sd.sort_cols = Some(read_struct_list(i_prot, Order::read_from_in_protocol)?),
                10 => sd.parameters = Some(read_string_map(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(sd)
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("StorageDescriptor"))?;
        if let Some(ref cols) = self.cols {
            o_prot.write_field_begin(&TFieldIdentifier::new("cols", TType::List, 1))?;
            write_struct_list(o_prot, cols, FieldSchema::write_to_out_protocol)?;
            o_prot.write_field_end()?;
        }
        write_optional_string(o_prot, "location", 2, &self.location)?;
        write_optional_string(o_prot, "inputFormat", 3, &self.input_format)?;
        write_optional_string(o_prot, "outputFormat", 4, &self.output_format)?;
        if let Some(compressed) = self.compressed {
            o_prot.write_field_begin(&TFieldIdentifier::new("compressed", TType::Bool, 5))?;
            o_prot.write_bool(compressed)?;
            o_prot.write_field_end()?;
        }
        if let Some(num_buckets) = self.num_buckets {
            o_prot.write_field_begin(&TFieldIdentifier::new("numBuckets", TType::I32, 6))?;
            o_prot.write_i32(num_buckets)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref serde_info) = self.serde_info {
            o_prot.write_field_begin(&TFieldIdentifier::new("serdeInfo", TType::Struct, 7))?;
            serde_info.write_to_out_protocol(o_prot)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref bucket_cols) = self.bucket_cols {
            o_prot.write_field_begin(&TFieldIdentifier::new("bucketCols", TType::List, 8))?;
            write_string_list(o_prot, bucket_cols)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref sort_cols) = self.sort_cols {
            o_prot.write_field_begin(&TFieldIdentifier::new("sortCols", TType::List, 9))?;
            write_struct_list(o_prot, sort_cols, Order::write_to_out_protocol)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref parameters) = self.parameters {
            o_prot.write_field_begin(&TFieldIdentifier::new("parameters", TType::Map, 10))?;
            write_string_map(o_prot, parameters)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// Full metastore descriptor of one table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub table_name: Option<String>,
    pub db_name: Option<String>,
    pub owner: Option<String>,
    pub create_time: Option<i32>,
    pub last_access_time: Option<i32>,
    pub retention: Option<i32>,
    pub sd: Option<StorageDescriptor>,
    pub partition_keys: Option<Vec<FieldSchema>>,
    pub parameters: Option<BTreeMap<String, String>>,
    pub view_original_text: Option<String>,
    pub view_expanded_text: Option<String>,
    pub table_type: Option<String>,
    pub temporary: Option<bool>,
}

impl Table {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut table = Table::default();
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => table.table_name = Some(i_prot.read_string()?),
                2 => table.db_name = Some(i_prot.read_string()?),
                3 => table.owner = Some(i_prot.read_string()?),
                4 => table.create_time = Some(i_prot.read_i32()?),
                5 => table.last_access_time = Some(i_prot.read_i32()?),
                6 => table.retention = Some(i_prot.read_i32()?),
                7 => table.sd = Some(StorageDescriptor::read_from_in_protocol(i_prot)?),
                8 => {
                    table.partition_keys =
                        Some(read_struct_list(i_prot, FieldSchema::read_from_in_protocol)?)
                }
                9 => table.parameters = Some(read_string_map(i_prot)?),
                10 => table.view_original_text = Some(i_prot.read_string()?),
                11 => table.view_expanded_text = Some(i_prot.read_string()?),
                12 => table.table_type = Some(i_prot.read_string()?),
                14 => table.temporary = Some(i_prot.read_bool()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(table)
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("Table"))?;
        write_optional_string(o_prot, "tableName", 1, &self.table_name)?;
        write_optional_string(o_prot, "dbName", 2, &self.db_name)?;
        write_optional_string(o_prot, "owner", 3, &self.owner)?;
        if let Some(create_time) = self.create_time {
            o_prot.write_field_begin(&TFieldIdentifier::new("createTime", TType::I32, 4))?;
            o_prot.write_i32(create_time)?;
            o_prot.write_field_end()?;
        }
        if let Some(last_access_time) = self.last_access_time {
            o_prot.write_field_begin(&TFieldIdentifier::new("lastAccessTime", TType::I32, 5))?;
            o_prot.write_i32(last_access_time)?;
            o_prot.write_field_end()?;
        }
        if let Some(retention) = self.retention {
            o_prot.write_field_begin(&TFieldIdentifier::new("retention", TType::I32, 6))?;
            o_prot.write_i32(retention)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref sd) = self.sd {
            o_prot.write_field_begin(&TFieldIdentifier::new("sd", TType::Struct, 7))?;
            sd.write_to_out_protocol(o_prot)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref partition_keys) = self.partition_keys {
            o_prot.write_field_begin(&TFieldIdentifier::new("partitionKeys", TType::List, 8))?;
            write_struct_list(o_prot, partition_keys, FieldSchema::write_to_out_protocol)?;
            o_prot.write_field_end()?;
        }
        if let Some(ref parameters) = self.parameters {
            o_prot.write_field_begin(&TFieldIdentifier::new("parameters", TType::Map, 9))?;
            write_string_map(o_prot, parameters)?;
            o_prot.write_field_end()?;
        }
        write_optional_string(o_prot, "viewOriginalText", 10, &self.view_original_text)?;
        write_optional_string(o_prot, "viewExpandedText", 11, &self.view_expanded_text)?;
        write_optional_string(o_prot, "tableType", 12, &self.table_type)?;
        if let Some(temporary) = self.temporary {
            o_prot.write_field_begin(&TFieldIdentifier::new("temporary", TType::Bool, 14))?;
            o_prot.write_bool(temporary)?;
            o_prot.write_field_end()?;
        }
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

/// Generic metastore failure declared on most service methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetaException {
    pub message: Option<String>,
}

impl MetaException {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut exception = MetaException::default();
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => exception.message = Some(i_prot.read_string()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(exception)
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("MetaException"))?;
        write_optional_string(o_prot, "message", 1, &self.message)?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

impl fmt::Display for MetaException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MetaException: {}",
            self.message.as_deref().unwrap_or("unknown cause")
        )
    }
}

impl std::error::Error for MetaException {}

/// Raised when the named database or table does not exist.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoSuchObjectException {
    pub message: Option<String>,
}

impl NoSuchObjectException {
    pub fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut exception = NoSuchObjectException::default();
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                1 => exception.message = Some(i_prot.read_string()?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(exception)
    }

    pub fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("NoSuchObjectException"))?;
        write_optional_string(o_prot, "message", 1, &self.message)?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

impl fmt::Display for NoSuchObjectException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NoSuchObjectException: {}",
            self.message.as_deref().unwrap_or("unknown object")
        )
    }
}

impl std::error::Error for NoSuchObjectException {}

//
// Service client
//

/// Client-side view of the two metastore calls the adapter passes
/// through.
pub trait TMetastoreSyncClient {
    fn get_table(&mut self, dbname: String, tbl_name: String) -> thrift::Result<Table>;
    fn get_all_tables(&mut self, db_name: String) -> thrift::Result<Vec<String>>;
}

/// Synchronous metastore client over a Thrift protocol pair.
pub struct MetastoreSyncClient<IP: TInputProtocol, OP: TOutputProtocol> {
    i_prot: IP,
    o_prot: OP,
    sequence_number: i32,
}

impl<IP: TInputProtocol, OP: TOutputProtocol> MetastoreSyncClient<IP, OP> {
    pub fn new(input_protocol: IP, output_protocol: OP) -> Self {
        MetastoreSyncClient {
            i_prot: input_protocol,
            o_prot: output_protocol,
            sequence_number: 0,
        }
    }

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

impl<IP: TInputProtocol, OP: TOutputProtocol> TMetastoreSyncClient
    for MetastoreSyncClient<IP, OP>
{
    fn get_table(&mut self, dbname: String, tbl_name: String) -> thrift::Result<Table> {
        self.sequence_number += 1;
        let message_ident =
            TMessageIdentifier::new("get_table", TMessageType::Call, self.sequence_number);
        self.o_prot.write_message_begin(&message_ident)?;
        let call_args = GetTableArgs { dbname, tbl_name };
        call_args.write_to_out_protocol(&mut self.o_prot)?;
        self.o_prot.write_message_end()?;
        self.o_prot.flush()?;
        self.read_reply_envelope("get_table")?;
        let result = GetTableResult::read_from_in_protocol(&mut self.i_prot)?;
        self.i_prot.read_message_end()?;
        result.ok_or()
    }

    fn get_all_tables(&mut self, db_name: String) -> thrift::Result<Vec<String>> {
        self.sequence_number += 1;
        let message_ident =
            TMessageIdentifier::new("get_all_tables", TMessageType::Call, self.sequence_number);
        self.o_prot.write_message_begin(&message_ident)?;
        let call_args = GetAllTablesArgs { db_name };
        call_args.write_to_out_protocol(&mut self.o_prot)?;
        self.o_prot.write_message_end()?;
        self.o_prot.flush()?;
        self.read_reply_envelope("get_all_tables")?;
        let result = GetAllTablesResult::read_from_in_protocol(&mut self.i_prot)?;
        self.i_prot.read_message_end()?;
        result.ok_or()
    }
}

struct GetTableArgs {
    dbname: String,
    tbl_name: String,
}

impl GetTableArgs {
    fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("get_table_args"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("dbname", TType::String, 1))?;
        o_prot.write_string(&self.dbname)?;
        o_prot.write_field_end()?;
        o_prot.write_field_begin(&TFieldIdentifier::new("tbl_name", TType::String, 2))?;
        o_prot.write_string(&self.tbl_name)?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

struct GetTableResult {
    result_value: Option<Table>,
    o1: Option<MetaException>,
    o2: Option<NoSuchObjectException>,
}

impl GetTableResult {
    fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut result_value: Option<Table> = None;
        let mut o1: Option<MetaException> = None;
        let mut o2: Option<NoSuchObjectException> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                0 => result_value = Some(Table::read_from_in_protocol(i_prot)?),
                1 => o1 = Some(MetaException::read_from_in_protocol(i_prot)?),
                2 => o2 = Some(NoSuchObjectException::read_from_in_protocol(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(GetTableResult {
            result_value,
            o1,
            o2,
        })
    }

    fn ok_or(self) -> thrift::Result<Table> {
        if let Some(exception) = self.o1 {
            Err(thrift::Error::User(Box::new(exception)))
        } else if let Some(exception) = self.o2 {
            Err(thrift::Error::User(Box::new(exception)))
        } else {
            self.result_value.ok_or_else(|| missing_result("get_table"))
        }
    }
}

struct GetAllTablesArgs {
    db_name: String,
}

impl GetAllTablesArgs {
    fn write_to_out_protocol(&self, o_prot: &mut dyn TOutputProtocol) -> thrift::Result<()> {
        o_prot.write_struct_begin(&TStructIdentifier::new("get_all_tables_args"))?;
        o_prot.write_field_begin(&TFieldIdentifier::new("db_name", TType::String, 1))?;
        o_prot.write_string(&self.db_name)?;
        o_prot.write_field_end()?;
        o_prot.write_field_stop()?;
        o_prot.write_struct_end()
    }
}

struct GetAllTablesResult {
    result_value: Option<Vec<String>>,
    o1: Option<MetaException>,
}

impl GetAllTablesResult {
    fn read_from_in_protocol(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Self> {
        let mut result_value: Option<Vec<String>> = None;
        let mut o1: Option<MetaException> = None;
        i_prot.read_struct_begin()?;
        loop {
            let field_ident = i_prot.read_field_begin()?;
            if field_ident.field_type == TType::Stop {
                break;
            }
            match field_id(&field_ident)? {
                0 => result_value = Some(read_string_list(i_prot)?),
                1 => o1 = Some(MetaException::read_from_in_protocol(i_prot)?),
                _ => i_prot.skip(field_ident.field_type)?,
            }
            i_prot.read_field_end()?;
        }
        i_prot.read_struct_end()?;
        Ok(GetAllTablesResult { result_value, o1 })
    }

    fn ok_or(self) -> thrift::Result<Vec<String>> {
        if let Some(exception) = self.o1 {
            Err(thrift::Error::User(Box::new(exception)))
        } else {
            self.result_value
                .ok_or_else(|| missing_result("get_all_tables"))
        }
    }
}

fn missing_result(call: &str) -> thrift::Error {
    thrift::Error::Application(ApplicationError::new(
        ApplicationErrorKind::MissingResult,
        format!("no result received for {call} call"),
    ))
}

fn write_optional_string(
    o_prot: &mut dyn TOutputProtocol,
    name: &str,
    id: i16,
    value: &Option<String>,
) -> thrift::Result<()> {
    if let Some(value) = value {
        o_prot.write_field_begin(&TFieldIdentifier::new(name, TType::String, id))?;
        o_prot.write_string(value)?;
        o_prot.write_field_end()?;
    }
    Ok(())
}

fn read_struct_list<T>(
    i_prot: &mut dyn TInputProtocol,
    read: impl Fn(&mut dyn TInputProtocol) -> thrift::Result<T>,
) -> thrift::Result<Vec<T>> {
    let list_ident = i_prot.read_list_begin()?;
    let mut items = Vec::with_capacity(list_ident.size.max(0) as usize);
    for _ in 0..list_ident.size {
        items.push(read(i_prot)?);
    }
    i_prot.read_list_end()?;
    Ok(items)
}

fn write_struct_list<T>(
    o_prot: &mut dyn TOutputProtocol,
    items: &[T],
    write: impl Fn(&T, &mut dyn TOutputProtocol) -> thrift::Result<()>,
) -> thrift::Result<()> {
    o_prot.write_list_begin(&TListIdentifier::new(TType::Struct, items.len() as i32))?;
    for item in items {
        write(item, o_prot)?;
    }
    o_prot.write_list_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use thrift::protocol::{TBinaryInputProtocol, TBinaryOutputProtocol};
    use thrift::transport::TBufferChannel;

    fn sample_table() -> Table {
        Table {
            table_name: Some("events".to_owned()),
            db_name: Some("default".to_owned()),
            owner: Some("hive".to_owned()),
            create_time: Some(1_700_000_000),
            sd: Some(StorageDescriptor {
                cols: Some(vec![FieldSchema {
                    name: Some("id".to_owned()),
                    type_: Some("bigint".to_owned()),
                    comment: None,
                }]),
                location: Some("/warehouse/default/events".to_owned()),
                input_format: Some("org.apache.hadoop.mapred.TextInputFormat".to_owned()),
                ..Default::default()
            }),
            table_type: Some("MANAGED_TABLE".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn table_round_trip() {
        let table = sample_table();
        let mut channel = TBufferChannel::with_capacity(4096, 4096);
        {
            let mut o_prot = TBinaryOutputProtocol::new(&mut channel, true);
            table.write_to_out_protocol(&mut o_prot).unwrap();
        }
        channel.copy_write_buffer_to_read_buffer();
        let mut i_prot = TBinaryInputProtocol::new(&mut channel, true);
        let decoded = Table::read_from_in_protocol(&mut i_prot).unwrap();
        assert_eq!(table, decoded);
    }

    #[test]
    fn get_table_reply_with_declared_exception_becomes_user_error() {
        // Server reply carrying NoSuchObjectException in result field 2.
        let reply = {
            let mut channel = TBufferChannel::with_capacity(4096, 4096);
            {
                let mut o_prot = TBinaryOutputProtocol::new(&mut channel, true);
                let o_prot: &mut dyn TOutputProtocol = &mut o_prot;
                o_prot
                    .write_message_begin(&TMessageIdentifier::new(
                        "get_table",
                        TMessageType::Reply,
                        1,
                    ))
                    .unwrap();
                o_prot
                    .write_struct_begin(&TStructIdentifier::new("get_table_result"))
                    .unwrap();
                o_prot
                    .write_field_begin(&TFieldIdentifier::new("o2", TType::Struct, 2))
                    .unwrap();
                NoSuchObjectException {
                    message: Some("default.missing table not found".to_owned()),
                }
                .write_to_out_protocol(o_prot)
                .unwrap();
                o_prot.write_field_end().unwrap();
                o_prot.write_field_stop().unwrap();
                o_prot.write_struct_end().unwrap();
                o_prot.write_message_end().unwrap();
            }
            channel.write_bytes()
        };

        let mut read_channel = TBufferChannel::with_capacity(4096, 4096);
        read_channel.set_readable_bytes(&reply);
        let mut write_channel = TBufferChannel::with_capacity(4096, 4096);
        let mut client = MetastoreSyncClient::new(
            TBinaryInputProtocol::new(&mut read_channel, true),
            TBinaryOutputProtocol::new(&mut write_channel, true),
        );

        let result = client.get_table("default".to_owned(), "missing".to_owned());
        match result {
            Err(thrift::Error::User(err)) => {
                assert!(err.to_string().contains("NoSuchObjectException"));
            }
            other => panic!("expected user error, got {other:?}"),
        }
    }
}

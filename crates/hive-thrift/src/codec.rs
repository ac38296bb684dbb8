//! Shared read/write helpers for the string containers that appear all
//! over both service IDLs.

use std::collections::BTreeMap;

use thrift::protocol::{TInputProtocol, TListIdentifier, TMapIdentifier, TOutputProtocol, TType};

pub(crate) fn read_string_list(i_prot: &mut dyn TInputProtocol) -> thrift::Result<Vec<String>> {
    let list_ident = i_prot.read_list_begin()?;
    let mut items = Vec::with_capacity(list_ident.size.max(0) as usize);
    for _ in 0..list_ident.size {
        items.push(i_prot.read_string()?);
    }
    i_prot.read_list_end()?;
    Ok(items)
}

pub(crate) fn write_string_list(
    o_prot: &mut dyn TOutputProtocol,
    items: &[String],
) -> thrift::Result<()> {
    o_prot.write_list_begin(&TListIdentifier::new(TType::String, items.len() as i32))?;
    for item in items {
        o_prot.write_string(item)?;
    }
    o_prot.write_list_end()
}

pub(crate) fn read_string_map(
    i_prot: &mut dyn TInputProtocol,
) -> thrift::Result<BTreeMap<String, String>> {
    let map_ident = i_prot.read_map_begin()?;
    let mut map = BTreeMap::new();
    for _ in 0..map_ident.size {
        let key = i_prot.read_string()?;
        let value = i_prot.read_string()?;
        map.insert(key, value);
    }
    i_prot.read_map_end()?;
    Ok(map)
}

pub(crate) fn write_string_map(
    o_prot: &mut dyn TOutputProtocol,
    map: &BTreeMap<String, String>,
) -> thrift::Result<()> {
    o_prot.write_map_begin(&TMapIdentifier::new(
        TType::String,
        TType::String,
        map.len() as i32,
    ))?;
    for (key, value) in map {
        o_prot.write_string(key)?;
        o_prot.write_string(value)?;
    }
    o_prot.write_map_end()
}

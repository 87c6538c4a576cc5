//! Identifier derivation.
//!
//! Every name a template emits that depends on the service comes from a
//! [`SymbolTable`]. The table is computed once from a [`ServiceDescriptor`]
//! and is read-only afterwards, so two templates asking for the same
//! [`Role`] always get the same string.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};
use svcgen_core::{ServiceDescriptor, to_title_case};
use tracing::{debug, trace};

/// The closed set of naming roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Title-cased service token, e.g. `Todo`.
    CapitalizedService,
    /// Package qualifier of the protocol types, e.g. `todo`.
    ProtoPackage,
    /// Import path of the protocol package.
    ProtoImportPath,
    /// Import path of the JSON:API helper types.
    JsonApiImportPath,
    /// Top-level resource type, e.g. `todo.Todo`.
    PayloadType,
    AttributesType,
    DataType,
    CollectionType,
    /// Local variable holding one row, e.g. `dtd`.
    ReceiverVarName,
    /// Row-shape struct, e.g. `dbTodo`.
    DbStructName,
    /// Local variable holding many rows, e.g. `dtdRows`.
    RowsVarName,
    ServiceStructName,
    ConstructorName,
    TableConst,
    ColumnsVar,
    /// Resource name literal, e.g. `todos`.
    ResourceName,
    AttrToRowFunc,
}

impl Role {
    pub const COUNT: usize = 17;

    /// All roles in declaration order.
    pub const ALL: [Role; Self::COUNT] = [
        Role::CapitalizedService,
        Role::ProtoPackage,
        Role::ProtoImportPath,
        Role::JsonApiImportPath,
        Role::PayloadType,
        Role::AttributesType,
        Role::DataType,
        Role::CollectionType,
        Role::ReceiverVarName,
        Role::DbStructName,
        Role::RowsVarName,
        Role::ServiceStructName,
        Role::ConstructorName,
        Role::TableConst,
        Role::ColumnsVar,
        Role::ResourceName,
        Role::AttrToRowFunc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::CapitalizedService => "CapitalizedService",
            Role::ProtoPackage => "ProtoPackage",
            Role::ProtoImportPath => "ProtoImportPath",
            Role::JsonApiImportPath => "JsonApiImportPath",
            Role::PayloadType => "PayloadType",
            Role::AttributesType => "AttributesType",
            Role::DataType => "DataType",
            Role::CollectionType => "CollectionType",
            Role::ReceiverVarName => "ReceiverVarName",
            Role::DbStructName => "DbStructName",
            Role::RowsVarName => "RowsVarName",
            Role::ServiceStructName => "ServiceStructName",
            Role::ConstructorName => "ConstructorName",
            Role::TableConst => "TableConst",
            Role::ColumnsVar => "ColumnsVar",
            Role::ResourceName => "ResourceName",
            Role::AttrToRowFunc => "AttrToRowFunc",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable mapping from [`Role`] to derived identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    names: [String; Role::COUNT],
}

impl SymbolTable {
    /// Derive every role from the descriptor.
    pub fn derive(descriptor: &ServiceDescriptor) -> Self {
        let service = descriptor.service();
        let short = descriptor.short_service();
        let root = descriptor.proto_root();

        let cap = to_title_case(service);
        let db_struct = format!("db{cap}");
        let service_struct = format!("{cap}Service");

        let names = Role::ALL.map(|role| match role {
            Role::CapitalizedService => cap.clone(),
            Role::ProtoPackage => service.to_string(),
            Role::ProtoImportPath => format!("{root}/{service}"),
            Role::JsonApiImportPath => format!("{root}/api/jsonapi"),
            Role::PayloadType => format!("{service}.{cap}"),
            Role::AttributesType => format!("{service}.{cap}Attributes"),
            Role::DataType => format!("{service}.{cap}Data"),
            Role::CollectionType => format!("{service}.{cap}Collection"),
            Role::ReceiverVarName => format!("d{short}"),
            Role::DbStructName => db_struct.clone(),
            Role::RowsVarName => format!("d{short}Rows"),
            Role::ServiceStructName => service_struct.clone(),
            Role::ConstructorName => format!("New{service_struct}"),
            Role::TableConst => format!("{service}DbTable"),
            Role::ColumnsVar => format!("{service}Cols"),
            Role::ResourceName => format!("{service}s"),
            Role::AttrToRowFunc => format!("attrTo{db_struct}"),
        });

        let table = Self { names };
        for (role, name) in table.iter() {
            trace!(%role, name, "derived symbol");
        }
        debug!(service, short, "symbol table derived");
        table
    }

    /// The identifier for `role`.
    pub fn get(&self, role: Role) -> &str {
        &self.names[role.index()]
    }

    /// Iterate `(role, name)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> {
        let names = self.names.iter().map(String::as_str);
        Role::ALL.into_iter().zip(names)
    }

    /// True if `name` is the value of some role.
    pub fn contains_value(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl std::ops::Index<Role> for SymbolTable {
    type Output = str;

    fn index(&self, role: Role) -> &str {
        self.get(role)
    }
}

impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for (role, name) in self.iter() {
            map.serialize_entry(role.as_str(), name)?;
        }
        map.end()
    }
}

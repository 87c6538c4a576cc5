//! Fixed names shared between the declaring template and its callers.

/// Receiver variable of every generated method.
pub const RECEIVER: &str = "s";

// Generated service methods.
pub const EXISTS_RESOURCE: &str = "existsResource";
pub const GET_RESOURCE_WITH_SELECTED_ATTR: &str = "getResourceWithSelectedAttr";
pub const GET_RESOURCE: &str = "getResource";
pub const GET_ALL_ROWS: &str = "getAllRows";
pub const DB_TO_RESOURCE_ATTRIBUTES: &str = "dbToResourceAttributes";
pub const BUILD_RESOURCE_DATA: &str = "buildResourceData";
pub const BUILD_RESOURCE: &str = "buildResource";
pub const BUILD_RESOURCE_RELATIONSHIPS: &str = "buildResourceRelationships";
pub const DB_TO_COLL_RESOURCE_DATA: &str = "dbToCollResourceData";
pub const DB_TO_COLL_RESOURCE: &str = "dbToCollResource";
pub const DB_TO_COLL_RESOURCE_WITH_PAGINATION: &str = "dbToCollResourceWithPagination";
pub const DB_TO_COLL_RESOURCE_WITH_REL_AND_PAGINATION: &str =
    "dbToCollResourceWithRelAndPagination";
pub const CONVERT_ALL_TO_ANY: &str = "convertAllToAny";

// Helper service API.
pub const HELPER_SERVICE: &str = "aphgrpc.Service";
pub const GET_RESOURCE_NAME: &str = "GetResourceName";
pub const GEN_RESOURCE_SELF_LINK: &str = "GenResourceSelfLink";
pub const GEN_COLL_RESOURCE_SELF_LINK: &str = "GenCollResourceSelfLink";
pub const GET_PAGINATION: &str = "GetPagination";
pub const MAP_FIELDS_TO_COLUMNS: &str = "MapFieldsToColumns";
pub const DBH: &str = "Dbh";
pub const PARAMS: &str = "Params";
pub const FIELDS: &str = "Fields";

// SQL runner API.
pub const RUNNER_DB: &str = "runner.DB";

// JSON:API shapes.
pub const LINKS: &str = "jsonapi.Links";
pub const META: &str = "jsonapi.Meta";
pub const PAGINATION: &str = "jsonapi.Pagination";
pub const ANY: &str = "any.Any";
pub const MARSHAL_ANY: &str = "MarshalAny";
pub const PTYPES: &str = "ptypes";

// Scaffolding the user fills in.
pub const TABLE_NAME_PLACEHOLDER: &str = "--TABLE NAME--";
pub const COLUMNS_PLACEHOLDER: &str = "List of column names ...";
pub const WHERE_PLACEHOLDER: &str = "--where clause---";
pub const INCLUDES_PLACEHOLDER: &str = "--allowed includes---";
pub const FIELD_COLUMNS_PLACEHOLDER: &str = "--field to column maps";
pub const REQUIRED_ATTRS_PLACEHOLDER: &str = "-- required attributes ---";
pub const RELATIONSHIPS_PLACEHOLDER: &str = "SomeRelationships";
pub const RELATIONS_OBJECT_PLACEHOLDER: &str = "relationsObject";
pub const ROW_ID_PLACEHOLDER: &str = "something";

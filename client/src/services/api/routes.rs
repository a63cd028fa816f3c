// Authentication
pub const LOGIN: &str = "/api/v0.1/login";
pub const REGISTER_USER: &str = "/api/v0.1/register";

// Rate
pub const GET_RATE: &str = "/api/v0.1/getRate";
pub const UPDATE_RATE: &str = "/api/v0.1/updateRate";

// Users
pub const GET_USER: &str = "/api/v0.1/user";

// Supply
pub const GET_SUPPLY_DATA: &str = "/api/v0.1/Supply";
pub const POST_SUPPLY_DATA: &str = "/api/v0.1/Supply/add";
pub const POST_SUPPLY_SPECIAL_DATA: &str = "/api/v0.1/Supply/addSpecial";
pub const GET_SUPPLY_BY_RANGE: &str = "/api/v0.1/Supply/Range";
pub const DELETE_SUPPLY: &str = "/api/v0.1/Supply";
pub const UPDATE_SUPPLY_STATUS: &str = "/api/v0.1/Supply/markCompleted";

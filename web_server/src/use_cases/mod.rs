mod route_guard;

pub use route_guard::{
    AUTH_COOKIE_NAME, AUTH_FLOW_PATH, PROTECTED_ROUTE_PREFIXES, RETURN_URL_PARAM, RouteGuard,
    RouteGuardSettings,
};

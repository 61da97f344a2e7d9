/// Default base URL of the storefront admin API.
pub const DEFAULT_API_BASE_URL: &str = "https://api-spring.bigzero.online";

/// Category CRUD endpoint.
pub const CATEGORIES_ENDPOINT: &str = "/api/v1/categories";

/// Product CRUD endpoint (paginated list).
pub const PRODUCTS_ENDPOINT: &str = "/api/v1/products";

/// Supplier CRUD endpoint.
pub const SUPPLIERS_ENDPOINT: &str = "/api/suppliers";

/// Invoice CRUD endpoint.
pub const INVOICES_ENDPOINT: &str = "/api/invoices";

/// Auth endpoint root (`/login`, `/signup`, `/refresh`, `/logout`, `/hello`).
pub const AUTH_ENDPOINT: &str = "/api/v1/auth";

/// Products fetched per page when the caller does not override the size.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Decimal precision for displayed amounts.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Token store entry name for the access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Token store entry name for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

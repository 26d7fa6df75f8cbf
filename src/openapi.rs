use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TexFab API",
        description = r#"
Master-data management API for a textile manufacturing business.

Each authenticated user ("owner") manages a private set of master records:
jobbers and jobber types, storage locations, a firm profile and the
material-type/material-shade lookup tables. Materials and trading parties
are shared across all authenticated users.

## Authentication

Obtain a bearer token via `POST /api/v1/auth/signup` or
`POST /api/v1/auth/login` and send it on every other request:

```
Authorization: Bearer <your-jwt-token>
```

## Errors

Validation failures return `422` with a `fields` array of
field-to-message pairs; uniqueness conflicts return `409` in the same
shape. Missing records return `404`.

## Material forms

`POST`/`PUT` on `/master/materials` accept a multipart form: the `kind`
discriminator (`yarn`, `greige`, `finished`, `trim`), common fields,
the kind-specific fields and an optional `image` file part. Pass
`embed=1` (or the `X-Requested-With: XMLHttpRequest` header) to receive
a JSON `{ok, url, id}` acknowledgment instead of a redirect.
        "#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Auth", description = "Signup and token issuance"),
        (name = "Users", description = "Profile and user directory"),
        (name = "Jobbers", description = "Contract-labor records and jobber types"),
        (name = "Materials", description = "Materials with kind-specific detail"),
        (name = "Parties", description = "Trading parties"),
        (name = "Locations", description = "Storage locations"),
        (name = "Firm", description = "The acting owner's firm profile"),
        (name = "Lookups", description = "Owner-scoped material types and shades"),
        (name = "Health", description = "Liveness and build info")
    ),
    components(schemas(
        crate::errors::ErrorResponse,
        crate::errors::FieldErrors,
        crate::errors::FieldError,
        crate::entities::users::Model,
        crate::handlers::auth::SignupRequest,
        crate::handlers::auth::LoginRequest,
        crate::handlers::auth::TokenResponse,
        crate::handlers::users::ProfileRequest,
        crate::handlers::jobbers::JobberRequest,
        crate::handlers::jobbers::JobberTypeRequest,
        crate::handlers::parties::PartyRequest,
        crate::handlers::locations::LocationRequest,
        crate::handlers::firms::FirmRequest,
        crate::handlers::lookups::MaterialTypeRequest,
        crate::handlers::lookups::MaterialShadeRequest,
        crate::models::material::MaterialKind,
        crate::models::material::MaterialDetail,
        crate::models::material::YarnDetail,
        crate::models::material::GreigeDetail,
        crate::models::material::FinishedDetail,
        crate::models::material::TrimDetail,
        crate::models::material::MaterialSubmission,
        crate::services::materials::MaterialRecord,
        crate::services::accounts::UserStats,
    ))
)]
pub struct ApiDoc;

/// Swagger UI mount served at `/docs`, backed by the generated document.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}

use crate::routes;
use axum::response::Html;

/// GET /api-docs handler - Swagger UI shell for the loaded document
///
/// A static page that loads Swagger UI from a CDN and points it at the
/// introspection endpoint, so the rendered docs always match whatever
/// document the process was started with.
pub async fn docs_handler() -> Html<String> {
    Html(DOCS_TEMPLATE.replace("__SPEC_URL__", routes::API_SPEC))
}

const DOCS_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Mock API Server - Documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
  <style>
    html { box-sizing: border-box; overflow-y: scroll; }
    *, *:before, *:after { box-sizing: inherit; }
    body { margin: 0; background: #fafafa; }
    .topbar { display: none; }
    .banner {
      background: #1b1b2f;
      color: #e0e0e0;
      padding: 14px 24px;
      font-family: sans-serif;
      font-size: 14px;
    }
    .banner strong { color: #7ec8e3; }
  </style>
</head>
<body>
  <div class="banner">
    <strong>Mock API Server</strong> &mdash; every operation below is served
    from a canned fixture; responses carry no real data.
  </div>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: "__SPEC_URL__",
        dom_id: "#swagger-ui",
        deepLinking: true,
        presets: [SwaggerUIBundle.presets.apis],
        defaultModelsExpandDepth: 0,
        tryItOutEnabled: true,
      });
    };
  </script>
</body>
</html>
"##;

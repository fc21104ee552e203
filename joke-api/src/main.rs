mod handlers;
mod pages;

use axum::{
    extract::Query,
    routing::{get, post},
    Form, Router,
};
use handlers::{handle_explain_form, ExplainForm};
use joke_app::AppContext;
use joke_ui::assets::{FAVICON, STYLES, SUBMIT_SCRIPT};
use joke_ui::pages::{ExplainJokeFn, GetDebugInfoFn};
use joke_ui::App;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // The credential is read exactly once, here.
    let app_context = AppContext::from_env();

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<GetDebugInfoFn>();
    server_fn::axum::register_explicit::<ExplainJokeFn>();
    tracing::info!("Registered server functions: GetDebugInfoFn, ExplainJokeFn");

    let app = Router::new()
        .route("/explain", get({
            let ctx = app_context.clone();
            move |query: Query<ExplainForm>| {
                let ctx = ctx.clone();
                async move {
                    handle_explain_form(ctx, query.0).await
                }
            }
        }).post({
            let ctx = app_context.clone();
            move |form: Form<ExplainForm>| {
                let ctx = ctx.clone();
                async move {
                    handle_explain_form(ctx, form.0).await
                }
            }
        }))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    if !app_context.has_credential() {
        tracing::warn!("Interactive flow disabled until a token is set and the server restarted");
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href=FAVICON/>
                <style>{STYLES}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
                <script>{SUBMIT_SCRIPT}</script>
            </body>
        </html>
    }
}

//! A simple GraphQL api, serving an in-memory shelf of books.
//! Note that the data only lives as long as the process; a restart reseeds
//! the shelf.
use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Router, extract::State, routing::post, serve};
use bookshelf::queries::{Mutation, Query};
use bookshelf::store::BookStore;
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// A type introduced just to make the handler a bit more readable.
type BookSchema = Schema<Query, Mutation, EmptySubscription>;

/// Where the server binds unless `BOOKSHELF_ADDR` says otherwise.
const DEFAULT_ADDR: &str = "127.0.0.1:8081";

/// The handler. It's the function that's run when there's a GraphQL request.
async fn handler(
    State(schema): State<BookSchema>,
    graphql_request: GraphQLRequest,
) -> GraphQLResponse {
    let result = schema.execute(graphql_request.into_inner()).await;
    result.into()
}

/// # Panics
/// Panics if the server couldn't bind to the provided address
#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).compact().init();

    // --- Set up the shelf (shared between the two schema roots) ---
    let store = Arc::new(BookStore::seeded());
    info!(books = store.count(), "seeded the shelf");
    let query = Query {
        store: Arc::clone(&store),
    };
    let mutation = Mutation { store };
    let schema = Schema::new(query, mutation, EmptySubscription);

    // --- Start server ---
    let app = Router::new()
        .route("/graphql", post(handler))
        .with_state(schema);
    let addr = env::var("BOOKSHELF_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Unable to bind ip address");
    info!("Server's on http://{addr}/graphql");
    serve(listener, app).await.expect("Unable to start server");
}

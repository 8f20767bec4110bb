use dotenvy::dotenv;

use lectern::logging::init_tracing;
use lectern::router::init_router;
use lectern::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "create-superadmin" {
        handle_create_superadmin(args).await;
        return;
    }

    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(9000);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind server address");
    tracing::info!("Server running on http://localhost:{}", port);
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}

async fn handle_create_superadmin(args: Vec<String>) {
    if args.len() != 5 {
        eprintln!("Usage: {} create-superadmin <name> <email> <password>", args[0]);
        std::process::exit(1);
    }

    let name = &args[2];
    let email = &args[3];
    let password = &args[4];

    let pool = lectern::config::database::init_db_pool().await;

    match lectern::cli::create_superadmin(&pool, name, email, password).await {
        Ok(_) => {
            println!("Superadmin created successfully: {} <{}>", name, email);
        }
        Err(e) => {
            eprintln!("Error creating superadmin: {}", e);
            std::process::exit(1);
        }
    }
}

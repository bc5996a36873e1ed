// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! authgate CLI
//!
//! Issues API calls through the session interceptor. The API base URL and
//! session token come from `AUTHGATE_API_URL` and `AUTHGATE_TOKEN`.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use authgate::{
    ApiClient, ApiUrlConfig, AppClientsService, AuthInterceptor, Error, RequestLogger, Result,
    SessionStore,
};

const API_URL_VAR: &str = "AUTHGATE_API_URL";
const TOKEN_VAR: &str = "AUTHGATE_TOKEN";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("authgate=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "fetch" => {
            if args.len() < 3 {
                eprintln!("Usage: authgate fetch <url>");
                return ExitCode::from(1);
            }
            fetch_url(&args[2]).await
        }
        "clients" => {
            if args.len() < 3 {
                eprintln!("Usage: authgate clients <app>");
                return ExitCode::from(1);
            }
            list_clients(&args[2]).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("authgate {}", authgate::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"authgate - Session-aware API client

USAGE:
    authgate <COMMAND> [OPTIONS]

COMMANDS:
    fetch <url>     Fetch a URL through the session interceptor
    clients <app>   List the API clients of an app
    help            Show this help message
    version         Show version information

ENVIRONMENT:
    {api}    Base URL of the protected API (required)
    {token}      Session token attached to API calls
    RUST_LOG            Log filter (default: authgate=info)

EXAMPLES:
    {api}=https://cms.example.com/ {token}=letmein authgate fetch https://cms.example.com/api/apps
    authgate clients my-app
"#,
        api = API_URL_VAR,
        token = TOKEN_VAR,
    );
}

/// Build the intercepted client from the environment
fn build_client() -> Result<(ApiClient, ApiUrlConfig, SessionStore)> {
    let api_url = env::var(API_URL_VAR)
        .map(ApiUrlConfig::new)
        .map_err(|_| Error::config(format!("{} is not set", API_URL_VAR)))?;

    let sessions = SessionStore::new().on_logout(Arc::new(|| {
        eprintln!("Session rejected by the server. Please sign in again.");
    }));
    if let Ok(token) = env::var(TOKEN_VAR) {
        sessions.sign_in(token);
    }

    let client = ApiClient::with_http()?
        .with_interceptor(AuthInterceptor::new(
            Arc::new(sessions.clone()),
            Arc::new(api_url.clone()),
        ))
        .with_interceptor(RequestLogger::default());

    Ok((client, api_url, sessions))
}

async fn fetch_url(url: &str) -> ExitCode {
    let (client, _, sessions) = match build_client() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    match client.get(url).await {
        Ok(response) => {
            println!("\n=== Response ===");
            println!("Status: {}", response.status);
            println!("URL: {}", response.url);
            println!("Content-Type: {:?}", response.content_type());
            println!("Size: {} bytes", response.body.len());
            println!("Time: {}ms", response.response_time_ms);
            println!("\n{}", response.text_lossy());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            if e.is_network() {
                eprintln!("No response from {}", e.url().unwrap_or(url));
            }
            if sessions.logout_count() > 0 {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

async fn list_clients(app: &str) -> ExitCode {
    let (client, api_url, sessions) = match build_client() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let service = AppClientsService::new(client, api_url);

    match service.get_clients(app).await {
        Ok(clients) => {
            println!("\n=== Clients of {} ({}) ===", app, clients.len());
            for c in &clients {
                println!("  - {} ({}) expires {}", c.name, c.id, c.expires_utc);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            if sessions.logout_count() > 0 {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    pub data: T,
}

pub fn output_success<T: Serialize>(data: T) -> anyhow::Result<()> {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data,
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

/// Prints an error response to stderr and exits with status 1.
pub fn output_error(message: &str) -> ! {
    let response = serde_json::json!({
        "success": false,
        "api_version": env!("CARGO_PKG_VERSION"),
        "error": message,
    });
    eprintln!("{}", response);
    std::process::exit(1);
}

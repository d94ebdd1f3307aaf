// Embeds the client assets output directory into the binary as build metadata.
// The value is read at runtime through `option_env!("CLIENT_ASSETS_DIRECTORY")`.

const CLIENT_ASSETS_ENV: &str = "CLIENT_ASSETS_DIRECTORY";

fn main() {
    println!("cargo:rerun-if-env-changed={CLIENT_ASSETS_ENV}");

    if let Ok(dir) = std::env::var(CLIENT_ASSETS_ENV) {
        let dir = dir.trim();
        if !dir.is_empty() {
            println!("cargo:rustc-env={CLIENT_ASSETS_ENV}={dir}");
        }
    }
}

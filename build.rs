use chrono::Datelike;

fn main() {
    // Copyright year shown in the footer
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());

    // Server and WASM bundle must agree on where contact messages go
    let transport =
        std::env::var("PORTFOLIO_CONTACT_TRANSPORT").unwrap_or_else(|_| "simulated".to_string());
    println!("cargo:rustc-env=PORTFOLIO_CONTACT_TRANSPORT={}", transport);

    println!("cargo:rerun-if-env-changed=PORTFOLIO_CONTACT_TRANSPORT");
    println!("cargo:rerun-if-changed=build.rs");
}

// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
 _       _                  _                   _           _
(_)_ __ | |_ ___ _ ____   _(_) _____      __   | |__   ___ | |_
| | '_ \| __/ _ \ '__\ \ / / |/ _ \ \ /\ / /   | '_ \ / _ \| __|
| | | | | ||  __/ |   \ V /| |  __/\ V  V /    | |_) | (_) | |_
|_|_| |_|\__\___|_|    \_/ |_|\___| \_/\_/     |_.__/ \___/ \__|

    Interview Answer Feedback Service
"#;
    println!("{}", banner);
}

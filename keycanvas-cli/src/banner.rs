use console::Style;

const BANNER: &str = r#"
 ██╗  ██╗ ███████╗ ██╗   ██╗  ██████╗  █████╗  ███╗   ██╗ ██╗   ██╗  █████╗  ███████╗
 ██║ ██╔╝ ██╔════╝ ╚██╗ ██╔╝ ██╔════╝ ██╔══██╗ ████╗  ██║ ██║   ██║ ██╔══██╗ ██╔════╝
 █████╔╝  █████╗    ╚████╔╝  ██║      ███████║ ██╔██╗ ██║ ██║   ██║ ███████║ ███████╗
 ██╔═██╗  ██╔══╝     ╚██╔╝   ██║      ██╔══██║ ██║╚██╗██║ ╚██╗ ██╔╝ ██╔══██║ ╚════██║
 ██║  ██╗ ███████╗    ██║    ╚██████╗ ██║  ██║ ██║ ╚████║  ╚████╔╝  ██║  ██║ ███████║
 ╚═╝  ╚═╝ ╚══════╝    ╚═╝     ╚═════╝ ╚═╝  ╚═╝ ╚═╝  ╚═══╝   ╚═══╝   ╚═╝  ╚═╝ ╚══════╝"#;

/// Print the KeyCanvas banner with version info.
pub fn print_banner() {
    let blue = Style::new().blue().bold();
    let dim = Style::new().dim();

    println!("{}", blue.apply_to(BANNER));
    println!(
        "  {}",
        dim.apply_to(format!(
            "v{} · Making Bitcoin addresses more human-friendly",
            env!("CARGO_PKG_VERSION")
        ))
    );
    println!();
}

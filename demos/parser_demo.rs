use defparser::{parse_definition, validate_definition};

fn main() {
    println!("=== Definition File Parser Demo ===");

    let definition = r#"Bootstrap: docker
From: ubuntu:22.04 # base image
Include: curl \
    git

%labels
    Author someone

%post
    apt-get update

%install
    make install
"#;

    let result = parse_definition(definition);

    println!("\nHeaders:");
    for (key, value) in &result.headers {
        println!("  {:?} => {:?}", key, value);
    }

    println!("\nSections:");
    for (name, lines) in &result.sections {
        println!(
            "  {} ({} line{})",
            name,
            lines.len(),
            if lines.len() == 1 { "" } else { "s" }
        );
    }

    let validation = validate_definition(&result);
    println!("\nFindings:");
    for diagnostic in &validation.diagnostics {
        println!("  {}", diagnostic);
    }
    println!("Exit code: {}", validation.exit_code());
}

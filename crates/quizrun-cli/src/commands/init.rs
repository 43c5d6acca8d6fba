//! The `quizrun init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("quizrun.toml").exists() {
        println!("quizrun.toml already exists, skipping.");
    } else {
        std::fs::write("quizrun.toml", SAMPLE_CONFIG)?;
        println!("Created quizrun.toml");
    }

    std::fs::create_dir_all("banks")?;
    let example_path = std::path::Path::new("banks/example.json");
    if example_path.exists() {
        println!("banks/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created banks/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizrun validate --bank banks/example.json");
    println!("  2. Run: quizrun play --bank banks/example.json");
    println!("  3. Point quizrun.toml at your own bank");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizrun configuration

# Question bank used when --bank is not given. .json files use the
# structured shape; any other extension is parsed as flat text.
bank = "banks/example.json"

# Where session scores are appended.
history = "scores.json"

# Uncomment to skip the interactive question-count prompt.
# default_count = 10
"#;

const EXAMPLE_BANK: &str = r#"[
  {
    "question": "What is the capital of France?",
    "option_a": "Paris",
    "option_b": "London",
    "option_c": "Berlin",
    "option_d": "Madrid",
    "answer": "A",
    "explanation": "Paris has been the French capital since 987.",
    "domain": "Geography"
  },
  {
    "question": "Which port does HTTPS use by default?",
    "option_a": "80",
    "option_b": "22",
    "option_c": "443",
    "option_d": "8080",
    "answer": "C",
    "explanation": "TLS-wrapped HTTP listens on port 443.",
    "domain": "Network Security"
  },
  {
    "question": "Which of these is an asymmetric cipher?",
    "option_a": "AES",
    "option_b": "RSA",
    "option_c": "ChaCha20",
    "option_d": "Blowfish",
    "answer": "B",
    "explanation": "RSA uses a public/private key pair; the others are symmetric.",
    "domain": "Cryptography"
  },
  {
    "question": "Which planet is known as the Red Planet?",
    "option_a": "Venus",
    "option_b": "Mars",
    "option_c": "Jupiter",
    "option_d": "Saturn",
    "answer": "B",
    "explanation": "Iron oxide on the surface gives Mars its color.",
    "domain": "Astronomy"
  }
]
"#;

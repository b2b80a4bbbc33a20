use clap::{Parser, Subcommand};

use wordbook_cli::commands::{config_ops, dict_ops};

#[derive(Parser)]
#[command(name = "wordtool", about = "Wordbook dictionary tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a raw word list into a compressed snapshot
    Convert {
        /// Input format (json, tsv)
        #[arg(long, default_value = "json")]
        source: String,
        /// Input word list
        input_file: String,
        /// Output snapshot file
        output_file: String,
    },
    /// Show snapshot info
    Info {
        /// Snapshot file
        dict_file: String,
    },
    /// Look up a word (exact, case-sensitive)
    Lookup {
        /// Snapshot file
        dict_file: String,
        /// Word to look up
        word: String,
    },
    /// List words starting with a prefix (case-insensitive)
    Suggest {
        /// Snapshot file
        dict_file: String,
        /// Prefix to complete
        prefix: String,
        /// Maximum number of suggestions (<= 0 uses the default)
        #[arg(short, long, default_value = "20", allow_negative_numbers = true)]
        n: i64,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            source,
            input_file,
            output_file,
        } => dict_ops::convert(&source, &input_file, &output_file),
        Command::Info { dict_file } => dict_ops::info(&dict_file),
        Command::Lookup { dict_file, word } => dict_ops::lookup(&dict_file, &word),
        Command::Suggest {
            dict_file,
            prefix,
            n,
        } => dict_ops::suggest(&dict_file, &prefix, n),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

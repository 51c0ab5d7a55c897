use clap::{Args, Parser, Subcommand};
use devkit_gen::QrFormat;
use devkit_text::Transform;

#[derive(Debug, Parser)]
#[command(name = "devkit", version, about = "Small developer utilities", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Specify configuration file path
    #[arg(long, global = true, env = "DEVKIT_CONFIG")]
    pub config: Option<String>,

    /// Log level, overrides [log].level
    #[arg(long, global = true, env = "DEVKIT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two files line by line, ignoring whitespace and blank lines
    Diff(DiffArgs),

    /// Convert a color between HEX, RGB and HSL
    Color {
        #[command(subcommand)]
        command: ColorCommand,
    },

    /// Apply a string transform to the input
    Text {
        /// One of: upper, lower, trim, reverse, word-count, letter-count, quote,
        /// spaces-to-newlines, camel-case, palindrome, remove-punctuation,
        /// csv-to-quoted, lines-to-quoted
        transform: Transform,

        /// Input text (reads stdin when omitted)
        input: Option<String>,
    },

    /// Replace every regex match in the input
    Replace {
        pattern: String,

        replacement: String,

        /// Input text (reads stdin when omitted)
        input: Option<String>,
    },

    /// Generate passwords, UUIDs or placeholder records
    Gen {
        #[command(subcommand)]
        command: GenCommand,
    },

    /// Encode text as a QR code
    Qr(QrArgs),

    /// Convert markdown to sanitized HTML
    Markdown {
        /// Markdown file (`-` or omitted reads stdin)
        file: Option<String>,

        /// Plain CommonMark: no tables, strikethrough or task lists
        #[arg(long)]
        no_gfm: bool,

        /// Keep single newlines as soft breaks instead of `<br />`
        #[arg(long)]
        no_breaks: bool,
    },

    /// Build an HTML form from `kind:label` lines
    Form {
        /// Spec file (`-` or omitted reads stdin)
        spec: Option<String>,

        /// Leave out the <style> block
        #[arg(long)]
        no_style: bool,

        /// Override the form title
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Old version (`-` for stdin)
    pub old: String,

    /// New version (`-` for stdin)
    pub new: String,

    /// Print `-`/`+` lines instead of two columns
    #[arg(long)]
    pub unified: bool,

    /// Only print rows that differ
    #[arg(long)]
    pub only_changes: bool,

    /// Width of the old column
    #[arg(long)]
    pub width: Option<usize>,
}

#[derive(Debug, Args)]
pub struct QrArgs {
    /// Text or URL to encode (reads stdin when omitted)
    pub text: Option<String>,

    /// svg or terminal
    #[arg(long, default_value = "svg")]
    pub format: QrFormat,

    /// SVG edge length in pixels, 128-512 (defaults to [qr].size)
    #[arg(long)]
    pub size: Option<u32>,

    /// Error correction: L, M, Q or H (defaults to [qr].error_correction)
    #[arg(long)]
    pub level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ColorCommand {
    /// From a 6-digit hex value, `#` optional
    Hex { value: String },

    /// From red, green and blue (clamped to 0-255)
    #[command(allow_negative_numbers = true)]
    Rgb { r: i64, g: i64, b: i64 },

    /// From hue (0-360), saturation and lightness (0-100), clamped
    #[command(allow_negative_numbers = true)]
    Hsl { h: i64, s: i64, l: i64 },

    /// Start from a color and apply field edits in order
    Edit {
        /// Starting hex value
        #[arg(long, default_value = "#000000")]
        start: String,

        /// `field=value` where field is hex, r, g, b, h, s or l
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        edits: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum GenCommand {
    /// Random password
    Password {
        /// Length, 8-32 (defaults to [password].length)
        #[arg(short, long)]
        length: Option<usize>,

        #[arg(long)]
        no_upper: bool,

        #[arg(long)]
        no_lower: bool,

        #[arg(long)]
        no_numbers: bool,

        #[arg(long)]
        no_symbols: bool,

        /// How many passwords to print
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// UUID, random (v4) unless --v5 is given
    Uuid {
        /// Name-based v5 UUID; with no value uses [uuid].name
        #[arg(long, num_args = 0..=1, default_missing_value = "")]
        v5: Option<String>,

        /// dns, url, oid or x500 (defaults to [uuid].namespace)
        #[arg(long)]
        namespace: Option<String>,

        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Placeholder name/email/address/phone records
    Data {
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Comma separated: name, email, address, phone
        #[arg(long)]
        fields: Option<String>,
    },
}

use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Disease name filter; exact names yield a primary match.
    #[arg(long)]
    pub disease: Option<String>,
    /// Ingredient filter; repeat for several ingredients.
    #[arg(long = "ingredient", value_name = "NAME")]
    pub ingredients: Vec<String>,
    /// Print the composed screen as JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Show the detail view for the Nth listed result (0-based).
    #[arg(long, value_name = "N")]
    pub detail: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ChatArgs {
    #[arg(allow_hyphen_values = true)]
    pub question: String,
}

#[derive(Debug, Args)]
pub struct TranscriptArgs {
    /// Delete the stored conversation instead of printing it.
    #[arg(long, default_value_t = false)]
    pub clear: bool,
}

#[derive(Debug, Args)]
pub struct LogArgs {
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct WebArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    #[arg(long, default_value_t = 8787)]
    pub port: u16,
}

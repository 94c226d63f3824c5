use anyhow::{Result, bail};
use log::{error, info};
use std::path::Path;

use commandline_tool::logging::{LOG_DIR, init_logging};
use commandline_tool::{parse_args, run, summary_line};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Real environment variables win over .env entries; a missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = parse_args();
    let _log_guard = init_logging(cli.debug, Path::new(LOG_DIR));

    let summary = match run(&cli).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Translation run failed: {:#}", e);
            return Err(e);
        }
    };

    println!("{}", summary_line(&summary));
    if summary.has_failures() {
        for (file_name, reason) in &summary.failed {
            println!("  {}: {}", file_name, reason);
        }
        bail!("{} file(s) failed to translate", summary.failed.len());
    }

    info!("Run completed successfully");
    Ok(())
}

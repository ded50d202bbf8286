use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = kanto_api::Args::parse();
	kanto_api::run(args).await
}

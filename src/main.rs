use std::sync::Arc;

use payments_backend::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(
		payments_backend::config::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}

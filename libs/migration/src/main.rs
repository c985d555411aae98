use migration::Migrator;
use sea_orm_migration::cli;

/// Migration CLI, e.g. `DATABASE_URL=sqlite://produtos.db?mode=rwc cargo run -p migration -- up`
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}

use anyhow::Result;
use codeprep::{logger, App, Config};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logger::init(&config)?;
    logger::log_startup(&config);

    // 初始化并运行应用
    let mut app = App::initialize(config);
    app.run(BufReader::new(tokio::io::stdin()), &mut tokio::io::stdout())
        .await?;

    Ok(())
}

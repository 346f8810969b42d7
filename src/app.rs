//! 终端交互循环 - 编排层
//!
//! 逐行读取输入，映射为导航或控制器操作，然后重新渲染当前页面。
//! 每行输入处理完（包括等待请求结束）之后才读取下一行，
//! 请求在途期间提交入口天然不可用

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::clients::{AnswerClient, AnswerSource};
use crate::config::Config;
use crate::controller::{QueryController, SubmitOutcome};
use crate::error::AppResult;
use crate::ui::pages::{about, not_found, prepare};
use crate::ui::{Route, Sidebar};

const HELP: &str = "\
Commands:
  <text>        set the question and submit it (Prepare page)
  ::<text>      same, for a question that starts with `:`
  :ask          submit the current question
  :sample <n>   fill in sample question n
  :go <path>    navigate (/, /about)
  :about        same as `:go /about`
  :prepare      same as `:go /`
  :sidebar      collapse / expand the sidebar
  :help         show this help
  :quit         exit
";

/// 一行输入对应的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 普通文本：作为问题填入并提交
    Text(String),
    Ask,
    Sample(String),
    Go(String),
    ToggleSidebar,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// 解析一行输入（不含换行符）
    ///
    /// 以 `:` 开头的是命令，其余原样作为问题文本。
    /// `::` 开头表示以 `:` 开头的问题，去掉第一个 `:` 后原样使用
    pub fn parse(line: &str) -> Self {
        if let Some(text) = line.strip_prefix("::") {
            return Command::Text(format!(":{}", text));
        }
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Text(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "ask" => Command::Ask,
            "sample" => Command::Sample(arg.to_string()),
            "go" => Command::Go(arg.to_string()),
            "about" => Command::Go("/about".to_string()),
            "prepare" => Command::Go("/".to_string()),
            "sidebar" => Command::ToggleSidebar,
            "help" => Command::Help,
            "quit" | "q" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// 应用主结构
pub struct App<S: AnswerSource> {
    config: Config,
    controller: QueryController<S>,
    sidebar: Sidebar,
    route: Route,
}

impl App<AnswerClient> {
    /// 使用 HTTP 问答客户端初始化应用
    pub fn initialize(config: Config) -> Self {
        let client = AnswerClient::new(&config);
        Self::with_source(config, client)
    }
}

impl<S: AnswerSource> App<S> {
    pub fn with_source(config: Config, source: S) -> Self {
        Self {
            sidebar: Sidebar::new(config.sidebar_collapsed),
            controller: QueryController::new(source),
            route: Route::default(),
            config,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn controller(&self) -> &QueryController<S> {
        &self.controller
    }

    /// 运行交互循环，直到 `:quit` 或输入结束
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        output.write_all(self.render().as_bytes()).await?;
        output.write_all(b"\nType :help for commands.\n").await?;
        output.flush().await?;

        while let Some(line) = lines.next_line().await? {
            if !self.handle(Command::parse(&line), output).await? {
                break;
            }
            output.flush().await?;
        }

        info!("👋 退出");
        output.flush().await?;
        Ok(())
    }

    /// 处理一条命令，返回 `false` 表示退出
    pub async fn handle<W>(&mut self, command: Command, output: &mut W) -> AppResult<bool>
    where
        W: AsyncWrite + Unpin,
    {
        debug!("命令: {:?}", command);

        match command {
            Command::Quit => return Ok(false),
            Command::Help => {
                output.write_all(HELP.as_bytes()).await?;
                return Ok(true);
            }
            Command::Unknown(line) => {
                warn!("未知命令: {}", line);
                output
                    .write_all(format!("Unknown command: {} (try :help)\n", line).as_bytes())
                    .await?;
                return Ok(true);
            }
            Command::Go(path) => {
                self.route = Route::resolve(&path);
                if let Route::NotFound(path) = &self.route {
                    error!("404 错误: 访问了不存在的路径: {}", path);
                }
            }
            Command::ToggleSidebar => self.sidebar.toggle(),
            Command::Sample(arg) => {
                if !self.on_prepare(output).await? {
                    return Ok(true);
                }
                match arg.parse::<usize>() {
                    Ok(index) => {
                        if let Err(e) = self.controller.select_sample_at(index) {
                            output.write_all(format!("{}\n", e).as_bytes()).await?;
                            return Ok(true);
                        }
                    }
                    Err(_) => {
                        output.write_all(b"Usage: :sample <n>\n").await?;
                        return Ok(true);
                    }
                }
            }
            Command::Text(text) => {
                if !self.on_prepare(output).await? {
                    return Ok(true);
                }
                self.controller.set_query(text);
                self.submit(output).await?;
            }
            Command::Ask => {
                if !self.on_prepare(output).await? {
                    return Ok(true);
                }
                self.submit(output).await?;
            }
        }

        output.write_all(self.render().as_bytes()).await?;
        Ok(true)
    }

    /// 侧边栏加当前页面
    pub fn render(&self) -> String {
        let path = self.route.path();
        let page = match &self.route {
            Route::Prepare => prepare::render(self.controller.state()),
            Route::About => about::render(),
            Route::NotFound(_) => not_found::render(),
        };
        format!("\n{}\n{}", self.sidebar.render(path), page)
    }

    /// 只有提问页可以输入问题
    async fn on_prepare<W>(&self, output: &mut W) -> AppResult<bool>
    where
        W: AsyncWrite + Unpin,
    {
        if self.route == Route::Prepare {
            return Ok(true);
        }
        output
            .write_all(b"Questions are asked on the Prepare page: use `:go /` first.\n")
            .await?;
        Ok(false)
    }

    async fn submit<W>(&mut self, output: &mut W) -> AppResult<()>
    where
        W: AsyncWrite + Unpin,
    {
        if self.controller.can_submit() {
            output
                .write_all(format!("{}\n", prepare::LOADING_INDICATOR).as_bytes())
                .await?;
            output.flush().await?;
        }

        if let SubmitOutcome::Failed(e) = self.controller.submit().await {
            if self.config.show_errors {
                output
                    .write_all(format!("⚠️ Could not get an answer: {}\n", e).as_bytes())
                    .await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AskError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// 记录收到的问题，总是返回同一个答案
    #[derive(Default)]
    struct RecordingSource {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingSource {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AnswerSource for RecordingSource {
        async fn ask(&self, query: &str) -> Result<String, AskError> {
            self.calls.lock().unwrap().push(query.to_string());
            Ok("answer".to_string())
        }
    }

    /// 把日志写进共享缓冲区
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_parse_plain_text() {
        assert_eq!(
            Command::parse("What is time complexity?"),
            Command::Text("What is time complexity?".to_string())
        );
        assert_eq!(Command::parse(""), Command::Text(String::new()));
        assert_eq!(
            Command::parse("  leading space"),
            Command::Text("  leading space".to_string())
        );
    }

    #[test]
    fn test_parse_escaped_colon_is_text() {
        assert_eq!(
            Command::parse("::) what is a heap"),
            Command::Text(":) what is a heap".to_string())
        );
        assert_eq!(Command::parse("::ask"), Command::Text(":ask".to_string()));
    }

    #[tokio::test]
    async fn test_escaped_colon_question_is_submitted() {
        let source = RecordingSource::default();
        let mut app = App::with_source(Config::default(), &source);

        let input = tokio::io::BufReader::new("::) what is a heap\n".as_bytes());
        let mut output = Vec::new();
        app.run(input, &mut output).await.unwrap();

        assert_eq!(app.controller().query(), ":) what is a heap");
        assert_eq!(source.calls(), vec![":) what is a heap"]);
    }

    #[tokio::test]
    async fn test_not_found_logged_once_per_navigation() {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let sink = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || CaptureWriter(sink.clone()))
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let source = RecordingSource::default();
        let mut app = App::with_source(Config::default(), &source);
        let input =
            tokio::io::BufReader::new(":go /nowhere\n:sidebar\n:sidebar\n:help\n".as_bytes());
        let mut output = Vec::new();
        app.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(logs.lock().unwrap().clone()).unwrap();
        assert_eq!(text.matches("不存在的路径: /nowhere").count(), 1);
        // 重绘仍然显示 404 页面
        let rendered = String::from_utf8(output).unwrap();
        assert_eq!(rendered.matches("Page Not Found").count(), 3);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(":ask"), Command::Ask);
        assert_eq!(Command::parse(":sample 3"), Command::Sample("3".to_string()));
        assert_eq!(Command::parse(":go /about"), Command::Go("/about".to_string()));
        assert_eq!(Command::parse(":about"), Command::Go("/about".to_string()));
        assert_eq!(Command::parse(":prepare"), Command::Go("/".to_string()));
        assert_eq!(Command::parse(":sidebar"), Command::ToggleSidebar);
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(
            Command::parse(":frobnicate"),
            Command::Unknown(":frobnicate".to_string())
        );
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use searchbox::config::settings::Settings;
use searchbox::domain::search::api::SearchApiConfig;
use searchbox::domain::search::client::HttpClient;
use searchbox::domain::search::request::SearchRequest;
use searchbox::domain::services::search_controller::SearchController;
use searchbox::infrastructure::http::reqwest_client::ReqwestHttpClient;
use searchbox::presentation::command::{Command, HELP_TEXT};
use searchbox::presentation::search_view::{Key, SearchView};
use searchbox::utils::telemetry;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// 主函数
///
/// 带参数运行时执行一次搜索并打印结果；否则进入交互模式，逐行读取查询
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting searchbox...");

    // 2. Load configuration
    let settings = Settings::new()?;
    let api = SearchApiConfig::try_from(&settings.search)?;
    if !settings.search.has_credentials() {
        warn!("search.api_key or search.cx is empty, the search API will reject requests");
    }
    info!(?api, "Configuration loaded");

    // 3. Wire controller and view
    let client = ReqwestHttpClient::with_user_agent(settings.search.user_agent.as_deref())?;
    let controller =
        SearchController::with_options(client, api, settings.search.controller_options());
    let mut view = SearchView::new(controller.subscribe());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        view.on_input(args.join(" "));
        if let Some(request) = view.on_key(Key::Enter) {
            run_search(&controller, &view, &request).await;
        }
        print_view(&view);
        return Ok(());
    }

    println!("{}", HELP_TEXT);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => println!("{}", HELP_TEXT),
            Command::Unknown(input) => println!("Unknown command: {} (try :help)", input),
            Command::Open(position) => match view.link(position) {
                Some(link) => {
                    // Returns once the opener is spawned, without waiting on it.
                    if let Err(e) = open::that_detached(&link) {
                        warn!(error = %e, link = %link, "Failed to open result");
                    }
                }
                None => println!("No result #{}", position),
            },
            Command::Query(text) => {
                view.on_input(text);
                if let Some(request) = view.on_key(Key::Enter) {
                    run_search(&controller, &view, &request).await;
                }
                print_view(&view);
            }
        }
    }

    info!("Bye");
    Ok(())
}

/// Runs one search, rendering the view once it enters the loading state.
async fn run_search<C: HttpClient>(
    controller: &SearchController<C>,
    view: &SearchView,
    request: &SearchRequest,
) {
    let mut changes = controller.subscribe();
    let search = controller.search(request.query());
    tokio::pin!(search);

    loop {
        tokio::select! {
            _ = &mut search => break,
            Ok(()) = changes.changed() => {
                if changes.borrow_and_update().is_loading() {
                    print_view(view);
                }
            }
        }
    }
}

fn print_view(view: &SearchView) {
    for line in view.render() {
        println!("{}", line);
    }
    println!();
}

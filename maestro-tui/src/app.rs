//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环只有一个消费者，按到达顺序处理两路输入：
//!
//!     输入线程 ──(crossterm Event)──┐
//!                                   ├──▶ loop {
//!     Executor ──(AppMessage)───────┘        terminal.draw(|f| view::render(&app, f))
//!                                            if app.should_quit { break }
//!                                            msg = select!(终端事件, 命令结果 / 定时器)
//!                                            commands = update::update(&mut app, msg)
//!                                            executor.execute_all(commands)
//!                                        }
//!
//! 输入线程阻塞在 crossterm::event::poll 上（250ms 超时），
//! 主循环关闭后它在下一次超时时发现通道关闭并退出。
//!
//! 状态只在 update() 中修改；命令在 tokio 任务中执行，
//! 完成后把结果作为 AppMessage 送回同一个队列。
//!

use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::backend::Executor;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 输入线程的轮询间隔
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// 运行应用主循环
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    executor: &Executor,
    mut messages: UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let size = terminal.size()?;
    app.area = Rect::new(0, 0, size.width, size.height);

    let (event_tx, mut events) = mpsc::unbounded_channel();
    spawn_input_reader(event_tx);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| view::render(app, frame))?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 等待下一条消息（终端事件或命令结果）
        let msg = tokio::select! {
            Some(event) = events.recv() => event::handle_event(event, app),
            Some(msg) = messages.recv() => msg,
            else => break,
        };

        // 4. 更新状态，执行产生的命令
        let commands = update::update(app, msg);
        executor.execute_all(commands);
    }

    Ok(())
}

/// 在独立线程中读取终端事件
fn spawn_input_reader(tx: UnboundedSender<Event>) {
    thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll_event(INPUT_POLL_INTERVAL) {
                Ok(Some(event)) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read terminal event");
                    break;
                }
            }
        }
    });
}

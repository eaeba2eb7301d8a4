use crate::config::Config;
use crate::service::CounterService;
use crate::ui::controller::CounterController;
use crate::ui::counter::CounterStore;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the counter screen until the user quits.
///
/// This task is the display loop: it owns the terminal, applies gestures
/// and redraws whenever the store publishes a change. The on-appear fetch
/// runs on its own task and reaches this loop only through the store
/// subscription.
pub async fn run(config: &Config, service: Arc<dyn CounterService>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut events = EventHandler::new(tick_rate);

    let store = Arc::new(CounterStore::default());
    let controller = CounterController::new(&store, service);

    let notifier = events.sender();
    let subscription = store.subscribe(move |_| {
        let _ = notifier.send(AppEvent::StateChanged);
    });

    let _ = controller.handle_on_appear();

    let mut animation_tick: u8 = 0;
    loop {
        let snapshot = store.snapshot();
        terminal.draw(|frame| draw(frame, &snapshot, animation_tick))?;

        match events.next().await {
            Some(AppEvent::Input(key)) => {
                if handle_key(&controller, key) == InputAction::Quit {
                    break;
                }
            }
            Some(AppEvent::Tick) => animation_tick = animation_tick.wrapping_add(1),
            Some(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Some(AppEvent::StateChanged) => {}
            None => break,
        }
    }

    // A fetch still in flight finds the store gone and drops its result.
    drop(subscription);
    drop(store);
    drop(guard);
    Ok(())
}

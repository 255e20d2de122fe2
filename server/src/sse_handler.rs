use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::{Stream, StreamExt, stream};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use snake_engine::{GameSnapshot, ObserverId, SnakeGame, log};

use crate::web_server::WebServerState;

/// Snapshots a viewer may fall behind by before it starts slowing the game down.
const UPDATE_BUFFER: usize = 4;

/// Unregisters the viewer's observer when its stream is dropped.
struct ObserverGuard {
    game: SnakeGame,
    id: ObserverId,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        if self.game.remove_observer(self.id) {
            log!("Viewer {} disconnected", self.id);
        }
    }
}

/// Streams one `update` event per tick, starting with the current state.
pub async fn updates_handler(
    State(state): State<WebServerState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let (tx, rx) = mpsc::channel::<GameSnapshot>(UPDATE_BUFFER);

    let id = state.game.add_observer(move |game: SnakeGame| {
        let tx = tx.clone();
        async move {
            let snapshot = game.snapshot().await;
            tx.send(snapshot)
                .await
                .map_err(|_| "viewer disconnected".to_string())
        }
    });
    log!("Viewer {} connected", id);

    let guard = ObserverGuard {
        game: state.game.clone(),
        id,
    };
    let initial = state.game.snapshot().await;

    let events = stream::once(async move { initial })
        .chain(ReceiverStream::new(rx))
        .map(move |snapshot| {
            let _viewer = &guard;
            Event::default().event("update").json_data(&snapshot)
        })
        .take_until(state.shutdown.clone().wait());

    Sse::new(events).keep_alive(KeepAlive::default())
}

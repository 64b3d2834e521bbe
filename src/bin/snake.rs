use battlesnake_wallflower::{
    strategies::Strategy,
    wallsnake::{
        models::{GameState, Movement, Status},
        types::{APIVersion, Head, Tail},
    },
};
use color_eyre::Result;
use log::info;
use warp::{http::Method, Filter};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

const DEFAULT_PORT: u16 = 6502;

fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let cors = warp::cors()
        .allow_method(Method::GET)
        .allow_method(Method::POST)
        .allow_header("content-type")
        .allow_any_origin();

    let logging = warp::log(NAME);

    let healthz = warp::get().and(warp::path::end().map(|| {
        warp::reply::json(&Status {
            apiversion: APIVersion::One,
            author:     AUTHOR.to_owned(),
            color:      "#ff5978".to_owned(),
            head:       Head::Gamer,
            tail:       Tail::Mouse,
            version:    VERSION.to_owned(),
        })
    }));

    let start = warp::post()
        .and(warp::path("start"))
        .and(warp::body::json())
        .map(|state: GameState| {
            if state.board.snakes.len() == 1 {
                info!("game {} started, we have it to ourselves", state.game.id);
            } else {
                info!(
                    "game {} started against {} other snakes",
                    state.game.id,
                    state.board.snakes.len() - 1
                );
            }
            String::new()
        });

    let do_move = warp::post()
        .and(warp::path("move"))
        .and(warp::body::json())
        .map(|state: GameState| {
            let action =
                Strategy::default().select_action(&state.you, &state.board);
            let movement = action.execute(&state.you, &state.board);
            info!("turn {}: {:?} says {}", state.turn, action, movement);
            warp::reply::json(&Movement {
                movement,
                shout: None,
            })
        });

    let end = warp::post()
        .and(warp::path("end"))
        .and(warp::body::json())
        .map(|state: GameState| {
            info!("game {} over after {} turns", state.game.id, state.turn);
            String::new()
        });

    let api = healthz.or(start).or(do_move).or(end).with(cors).with(logging);

    let port = port();
    info!("listening on port {port}");
    warp::serve(api).run(([0, 0, 0, 0], port)).await;

    Ok(())
}

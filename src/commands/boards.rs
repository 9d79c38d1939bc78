use serde_json::Value;

use crate::cli::{BoardIdArgs, BoardsAddQueryArgs, BoardsCreateArgs, BoardsUpdateArgs};
use crate::dispatch::{DispatchRequest, Dispatcher, Reply, api_path};
use crate::error::HoneyError;
use crate::models::boards::{
    Board, BoardQuery, GraphSettings, append_board_query, merge_board_update,
};

use super::{Failure, Outcome, run, with_body};

fn board_path(id: &str) -> String {
    api_path(["1", "boards", id])
}

pub async fn create(command: &str, d: &Dispatcher, args: &BoardsCreateArgs) -> Outcome {
    let board = Board::new(&args.name, &args.description, &args.column_layout);
    let req = with_body(command, DispatchRequest::post(api_path(["1", "boards"])), &board)?;
    run::<Board>(command, d, req).await
}

pub async fn list(command: &str, d: &Dispatcher) -> Outcome {
    run::<Vec<Board>>(command, d, DispatchRequest::get(api_path(["1", "boards"]))).await
}

pub async fn get(command: &str, d: &Dispatcher, args: &BoardIdArgs) -> Outcome {
    run::<Board>(command, d, DispatchRequest::get(board_path(&args.id))).await
}

pub async fn delete(command: &str, d: &Dispatcher, args: &BoardIdArgs) -> Outcome {
    run::<Value>(command, d, DispatchRequest::delete(board_path(&args.id))).await
}

pub async fn update(command: &str, d: &Dispatcher, args: &BoardsUpdateArgs) -> Outcome {
    let (fetched, rendered) = fetch(command, d, &args.id).await?;
    let body = merge_board_update(
        fetched,
        Board::new(&args.name, &args.description, &args.column_layout),
    );
    put(command, d, &args.id, &body, rendered).await
}

pub async fn add_query(command: &str, d: &Dispatcher, args: &BoardsAddQueryArgs) -> Outcome {
    let (fetched, rendered) = fetch(command, d, &args.id).await?;
    let body = append_board_query(fetched, query_from_args(args));
    put(command, d, &args.id, &body, rendered).await
}

fn query_from_args(args: &BoardsAddQueryArgs) -> BoardQuery {
    BoardQuery {
        caption: args.caption.clone(),
        graph_settings: GraphSettings {
            hide_markers: args.hide_markers,
            log_scale: args.log_scale,
            omit_missing_values: args.omit_missing,
            stacked_graphs: args.stacked_graphs,
            utc_xaxis: args.utc_xaxis,
            overlaid_charts: args.overlaid_charts,
        },
        query_style: args.style.clone(),
        dataset: args.dataset.clone(),
        query_id: args.query_id.clone(),
        query_annotation_id: args.annotation_id.clone(),
        ..BoardQuery::default()
    }
}

/// GET half of a read-modify-write. In dry-run the GET is only rendered and
/// the caller builds its PUT from an empty board.
async fn fetch(command: &str, d: &Dispatcher, id: &str) -> Result<(Board, Option<String>), Failure> {
    let req = DispatchRequest::get(board_path(id));
    match d.send::<Board>(&req).await {
        Ok(Reply::Decoded(board)) => Ok((board, None)),
        Ok(Reply::DryRun(text)) => Ok((Board::default(), Some(text))),
        Ok(Reply::Empty) => Err(Failure::new(
            command,
            HoneyError::serialization(format!("board {id} came back without a body")),
            &req,
        )),
        Err(e) => Err(Failure::new(command, e, &req)),
    }
}

async fn put(
    command: &str,
    d: &Dispatcher,
    id: &str,
    body: &Board,
    fetch_rendering: Option<String>,
) -> Outcome {
    let req = with_body(command, DispatchRequest::put(board_path(id)), body)?;
    let reply = run::<Board>(command, d, req).await?;

    Ok(match (fetch_rendering, reply) {
        (Some(first), Reply::DryRun(second)) => Reply::DryRun(format!("{first}\n{second}")),
        (_, reply) => reply,
    })
}

//! The batches `api-check` runs by default: every endpoint with valid,
//! invalid and missing input over GET, then every endpoint over POST.

use api_core::{params, CheckRecord, Params};

use crate::checker::ApiChecker;
use crate::error::CheckError;
use crate::transport::Transport;

pub struct Batch {
    pub urls: Vec<&'static str>,
    pub inputs: Vec<Option<Params>>,
}

pub fn get_batch() -> Batch {
    Batch {
        urls: vec![
            "/options/",
            "/sayhello/",
            "/calculate/5",
            "/calculate/prueba",
            "/calculate/",
            "/calculate/",
            "/concatenate/",
            "/concatenate/",
            "/concatenate/",
            "/concatenate/",
            "/users/1",
            "/users/100",
            "/users/prueba",
        ],
        inputs: vec![
            None,
            None,
            None,
            None,
            Some(params([("num", "5")])),
            Some(params([("num", "prueba")])),
            Some(params([("cad1", "Me llamo Marcos "), ("cad2", " Rivera Martínez")])),
            Some(params([("cad1", ""), ("cad2", "Rivera Martínez")])),
            Some(params([("cad1", "Me llamo Marcos "), ("cad2", "")])),
            Some(params([("cad1", ""), ("cad2", "")])),
            None,
            None,
            None,
        ],
    }
}

/// Every route only answers GET, so each of these is expected to come back
/// as a 405.
pub fn post_batch() -> Batch {
    let urls = vec![
        "/options/",
        "/sayhello/",
        "/calculate/5",
        "/calculate/",
        "/concatenate/",
        "/users/1",
    ];
    let inputs = vec![None; urls.len()];
    Batch { urls, inputs }
}

/// Run the GET batch then the POST batch, returning all records in order.
pub fn run<T, W>(checker: &mut ApiChecker<T, W>) -> Result<Vec<CheckRecord>, CheckError>
where
    T: Transport,
    W: std::io::Write,
{
    let get = get_batch();
    let mut records = checker.check_get_requests(&get.urls, &get.inputs)?;
    let post = post_batch();
    records.extend(checker.check_post_requests(&post.urls, &post.inputs)?);
    Ok(records)
}

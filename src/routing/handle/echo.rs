use crate::http::{Request, Response, response::text_response, uri::QueryMap};

pub const MSG_PARAM: &str = "msg";

/// responds with the first `msg` query value, or an empty body when there
/// is none. the decoded bytes are sent back as is, utf-8 or not.
pub fn handle(req: &Request) -> Response {
    let query = QueryMap::new(req.uri());
    let msg = query.get_value(MSG_PARAM)
        .flatten()
        .unwrap_or_default();

    text_response(msg)
}

use std::path::PathBuf;

use fileserv::server::connection::resolve_path;

#[test]
fn test_resolve_path_joins_root_and_request() {
    assert_eq!(
        resolve_path("/srv/www", "/index.html"),
        PathBuf::from("/srv/www/index.html")
    );
}

#[test]
fn test_resolve_path_is_plain_concatenation() {
    // No canonicalization happens here; traversal protection belongs to
    // the layer that produced the request path.
    assert_eq!(
        resolve_path("./public", "/a/../b.css"),
        PathBuf::from("./public/a/../b.css")
    );
}

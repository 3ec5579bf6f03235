//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet drawing code lives in `assets/js/cluster-map.js`. It is
//! evaluated at global scope once Leaflet has loaded and its functions are
//! promoted to `window.*`.

static CLUSTER_MAP_JS: &str = include_str!("../assets/js/cluster-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WQC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map script with a wait-for-Leaflet polling loop.
///
/// Call once at app startup.
pub fn init_map() {
    let store_js = format!(
        "window.__wqcMapScript = {};",
        serde_json::to_string(CLUSTER_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__wqcMapScript);
                    delete window.__wqcMapScript;
                    if (typeof renderClusterMap !== 'undefined') window.renderClusterMap = renderClusterMap;
                    if (typeof destroyClusterMap !== 'undefined') window.destroyClusterMap = destroyClusterMap;
                    window.__wqcMapReady = true;
                    console.log('WQC map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a map view (JSON of `wqc_data::MapView`) into a container.
///
/// Each container has one pending view slot and at most one poll. A newer
/// view replaces the pending one, so a late poll always draws the latest.
pub fn render_cluster_map(container_id: &str, view_json: &str) {
    log::debug!(
        "[WQC] queueing map render into #{} ({} bytes)",
        container_id,
        view_json.len()
    );
    call_js(&render_script(container_id, view_json));
}

fn render_script(container_id: &str, view_json: &str) -> String {
    let escaped_view = view_json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    format!(
        r#"
        (function() {{
            var pending = window.__wqcPending = window.__wqcPending || {{}};
            var polls = window.__wqcPolls = window.__wqcPolls || {{}};
            pending['{container_id}'] = '{escaped_view}';
            if (polls['{container_id}']) return;
            polls['{container_id}'] = setInterval(function() {{
                if (!('{container_id}' in pending)) {{
                    clearInterval(polls['{container_id}']);
                    delete polls['{container_id}'];
                    return;
                }}
                if (window.__wqcMapReady &&
                    typeof window.renderClusterMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(polls['{container_id}']);
                    delete polls['{container_id}'];
                    var view = pending['{container_id}'];
                    delete pending['{container_id}'];
                    try {{
                        window.renderClusterMap('{container_id}', view);
                    }} catch(e) {{ console.error('[WQC] renderClusterMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Tear down the Leaflet map in a container and clear its contents.
///
/// Also drops any view still waiting to be drawn there.
pub fn destroy_map(container_id: &str) {
    log::debug!("[WQC] destroying map in #{}", container_id);
    call_js(&destroy_script(container_id));
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
    {
        el.set_inner_html("");
    }
}

fn destroy_script(container_id: &str) -> String {
    format!(
        "if (window.__wqcPending) delete window.__wqcPending['{0}']; \
         if (window.destroyClusterMap) window.destroyClusterMap('{0}');",
        container_id
    )
}

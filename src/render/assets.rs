//! Static assets emitted next to the generated pages.
//!
//! The stylesheet and search script are fixed strings written verbatim on
//! every run. The script's tuning numbers mirror [`crate::constants::search`];
//! the tests below keep the two in step.

/// Shared stylesheet, light theme by default with a `[data-theme="dark"]`
/// override set by the theme toggle.
pub const STYLE_CSS: &str = r##"/* autodoc stylesheet */
:root {
  --bg: #ffffff;
  --bg-panel: #f6f8fa;
  --bg-hover: #eaeef2;
  --fg: #1f2328;
  --fg-muted: #59636e;
  --border: #d1d9e0;
  --accent: #0969da;
  --badge-bg: #ddf4ff;
  --badge-fg: #0969da;
  --code-bg: #f6f8fa;
  --hl-keyword: #cf222e;
  --hl-string: #0a3069;
  --hl-comment: #59636e;
  --hl-function: #8250df;
  --hl-number: #0550ae;
  --hl-constant: #0550ae;
  --hl-type: #953800;
  --hl-operator: #cf222e;
  --hl-property: #0550ae;
}

[data-theme="dark"] {
  --bg: #0d1117;
  --bg-panel: #161b22;
  --bg-hover: #21262d;
  --fg: #e6edf3;
  --fg-muted: #8d96a0;
  --border: #30363d;
  --accent: #4493f8;
  --badge-bg: #121d2f;
  --badge-fg: #4493f8;
  --code-bg: #161b22;
  --hl-keyword: #ff7b72;
  --hl-string: #a5d6ff;
  --hl-comment: #8d96a0;
  --hl-function: #d2a8ff;
  --hl-number: #79c0ff;
  --hl-constant: #79c0ff;
  --hl-type: #ffa657;
  --hl-operator: #ff7b72;
  --hl-property: #79c0ff;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
  font-size: 15px;
  line-height: 1.5;
  color: var(--fg);
  background: var(--bg);
}

code, pre, .signature {
  font-family: ui-monospace, "SF Mono", Menlo, Consolas, monospace;
  font-size: 13px;
}

a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }

/* Top bar */
.topbar {
  display: flex;
  align-items: center;
  gap: 16px;
  padding: 10px 20px;
  border-bottom: 1px solid var(--border);
  background: var(--bg-panel);
  position: sticky;
  top: 0;
  z-index: 10;
}

.brand {
  font-weight: 600;
  color: var(--fg);
  white-space: nowrap;
}

.searchbox { position: relative; flex: 1; max-width: 480px; }

.searchbox input {
  width: 100%;
  padding: 6px 10px;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--bg);
  color: var(--fg);
}

#search-results {
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  margin-top: 4px;
  max-height: 360px;
  overflow-y: auto;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--bg);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
}

#search-results[hidden] { display: none; }

.search-result {
  display: flex;
  align-items: baseline;
  gap: 8px;
  padding: 6px 10px;
  color: var(--fg);
}

.search-result:hover { background: var(--bg-hover); text-decoration: none; }

.result-kind {
  font-size: 11px;
  text-transform: uppercase;
  color: var(--badge-fg);
  background: var(--badge-bg);
  border-radius: 4px;
  padding: 1px 5px;
}

.result-name { font-weight: 600; }
.result-file { margin-left: auto; color: var(--fg-muted); font-size: 12px; }
.search-empty { margin: 0; padding: 8px 10px; color: var(--fg-muted); }

#theme-toggle {
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--bg);
  color: var(--fg);
  padding: 5px 10px;
  cursor: pointer;
}

/* Layout */
.layout { display: flex; min-height: calc(100vh - 53px); }

.sidebar {
  width: 260px;
  flex-shrink: 0;
  padding: 16px;
  border-right: 1px solid var(--border);
  background: var(--bg-panel);
  overflow-y: auto;
}

.sidebar h2 {
  font-size: 12px;
  text-transform: uppercase;
  letter-spacing: 0.04em;
  color: var(--fg-muted);
  margin: 14px 0 6px;
}

.nav-tree { list-style: none; margin: 0; padding: 0; }
.nav-tree li { margin: 1px 0; }
.nav-tree a {
  display: block;
  padding: 3px 8px;
  border-radius: 6px;
  color: var(--fg);
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}
.nav-tree a:hover { background: var(--bg-hover); text-decoration: none; }
.nav-tree a.current { color: var(--accent); font-weight: 600; }
.nav-tree .nav-nested { list-style: none; padding-left: 14px; }

.content { flex: 1; padding: 24px 32px; max-width: 980px; }

/* Module page */
.module-path { color: var(--fg-muted); margin-top: -8px; }

.description.inferred-text { color: var(--fg-muted); }

.inferred {
  font-style: italic;
  font-size: 12px;
  color: var(--fg-muted);
}

.decl {
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 14px 16px;
  margin: 14px 0;
}

.decl-header { display: flex; align-items: center; gap: 8px; flex-wrap: wrap; }
.decl-header h3, .decl-header h4 { margin: 0; }

.signature { background: var(--code-bg); border-radius: 6px; padding: 2px 6px; }

.badge {
  font-size: 11px;
  border-radius: 10px;
  padding: 1px 8px;
  background: var(--badge-bg);
  color: var(--badge-fg);
  white-space: nowrap;
}

.decorators { color: var(--fg-muted); margin: 4px 0; }

.params, .facts { margin: 6px 0; padding-left: 22px; }
.params li, .facts li { margin: 2px 0; }
.annotation { color: var(--fg-muted); }
.returns { margin: 6px 0; }

.source-listing { margin-top: 10px; }
.source-listing summary { cursor: pointer; color: var(--fg-muted); }

ol.source {
  margin: 8px 0 0;
  padding: 10px 10px 10px 56px;
  background: var(--code-bg);
  border-radius: 6px;
  overflow-x: auto;
}

ol.source li {
  white-space: pre;
  font-family: ui-monospace, "SF Mono", Menlo, Consolas, monospace;
  font-size: 13px;
}
ol.source li::marker { color: var(--fg-muted); font-size: 11px; }

/* Syntax highlighting */
.hl-keyword { color: var(--hl-keyword); }
.hl-string { color: var(--hl-string); }
.hl-escape { color: var(--hl-type); }
.hl-comment { color: var(--hl-comment); font-style: italic; }
.hl-function, .hl-function-builtin, .hl-function-method { color: var(--hl-function); }
.hl-number { color: var(--hl-number); }
.hl-constant, .hl-constant-builtin { color: var(--hl-constant); }
.hl-constructor, .hl-type { color: var(--hl-type); }
.hl-operator { color: var(--hl-operator); }
.hl-property { color: var(--hl-property); }
.hl-variable { color: var(--fg); }
.hl-punctuation-bracket, .hl-punctuation-special { color: var(--fg-muted); }

/* Index page */
.module-index { width: 100%; border-collapse: collapse; margin-top: 12px; }
.module-index th, .module-index td {
  text-align: left;
  padding: 8px 10px;
  border-bottom: 1px solid var(--border);
}
.module-index th { color: var(--fg-muted); font-size: 12px; text-transform: uppercase; }
.count { color: var(--fg-muted); }

.footer {
  margin-top: 32px;
  padding-top: 12px;
  border-top: 1px solid var(--border);
  color: var(--fg-muted);
  font-size: 12px;
}
"##;

/// Search widget and theme toggle. Plain browser JavaScript, no framework;
/// the index is fetched once and cached, a single timer drives debouncing,
/// and a failed fetch leaves the results panel untouched.
pub const SEARCH_JS: &str = r##"// autodoc search widget
(function () {
  'use strict';

  var MIN_QUERY_LEN = 2;
  var DEBOUNCE_MS = 300;
  var MAX_RESULTS = 50;
  var THEME_KEY = 'autodoc-theme';

  // ---- theme ----

  function applyTheme(theme) {
    document.documentElement.setAttribute('data-theme', theme);
  }

  function storedTheme() {
    try {
      return localStorage.getItem(THEME_KEY);
    } catch (err) {
      return null;
    }
  }

  function toggleTheme() {
    var current = document.documentElement.getAttribute('data-theme');
    var next = current === 'dark' ? 'light' : 'dark';
    applyTheme(next);
    try {
      localStorage.setItem(THEME_KEY, next);
    } catch (err) {
      // storage unavailable, theme lasts for this page only
    }
  }

  // ---- search ----

  var index = null; // cached after the first successful fetch
  var timer = null; // the one debounce timer
  var lastQuery = '';

  function loadIndex() {
    if (index !== null) {
      return Promise.resolve(index);
    }
    return fetch('search-index.json')
      .then(function (resp) {
        if (!resp.ok) {
          throw new Error('index fetch failed: ' + resp.status);
        }
        return resp.json();
      })
      .then(function (data) {
        index = data;
        return index;
      });
  }

  function lookup(entries, query) {
    var q = query.toLowerCase();
    var prefix = [];
    var partial = [];
    for (var i = 0; i < entries.length; i++) {
      var name = entries[i].name.toLowerCase();
      if (name.indexOf(q) === 0) {
        prefix.push(entries[i]);
      } else if (name.indexOf(q) !== -1) {
        partial.push(entries[i]);
      }
    }
    return prefix.concat(partial).slice(0, MAX_RESULTS);
  }

  function renderResults(panel, entries) {
    panel.innerHTML = '';
    if (entries.length === 0) {
      var empty = document.createElement('p');
      empty.className = 'search-empty';
      empty.textContent = 'No results';
      panel.appendChild(empty);
    }
    for (var i = 0; i < entries.length; i++) {
      var entry = entries[i];
      var link = document.createElement('a');
      link.className = 'search-result';
      link.href = entry.anchor ? entry.page + '#' + entry.anchor : entry.page;

      var kind = document.createElement('span');
      kind.className = 'result-kind';
      kind.textContent = entry.type;
      var name = document.createElement('span');
      name.className = 'result-name';
      name.textContent = entry.name;
      var file = document.createElement('span');
      file.className = 'result-file';
      file.textContent = entry.file;

      link.appendChild(kind);
      link.appendChild(name);
      link.appendChild(file);
      panel.appendChild(link);
    }
    panel.hidden = false;
  }

  function onInput(input, panel) {
    if (timer !== null) {
      clearTimeout(timer); // keystroke while pending re-arms the timer
    }
    timer = setTimeout(function () {
      timer = null;
      var query = input.value.trim();
      lastQuery = query;
      if (query.length < MIN_QUERY_LEN) {
        panel.innerHTML = '';
        panel.hidden = true;
        return;
      }
      loadIndex()
        .then(function (entries) {
          if (query !== lastQuery) {
            return; // superseded while the fetch was in flight
          }
          renderResults(panel, lookup(entries, query));
        })
        .catch(function () {
          // index unavailable, leave the panel as it was
        });
    }, DEBOUNCE_MS);
  }

  // ---- wiring ----

  document.addEventListener('DOMContentLoaded', function () {
    var saved = storedTheme();
    if (saved === 'dark' || saved === 'light') {
      applyTheme(saved);
    }

    var toggle = document.getElementById('theme-toggle');
    if (toggle) {
      toggle.addEventListener('click', toggleTheme);
    }

    var input = document.getElementById('search-input');
    var panel = document.getElementById('search-results');
    if (input && panel) {
      input.addEventListener('input', function () {
        onInput(input, panel);
      });
      document.addEventListener('click', function (event) {
        if (!panel.contains(event.target) && event.target !== input) {
          panel.hidden = true;
        }
      });
    }
  });
})();
"##;

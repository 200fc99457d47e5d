//! The dashboard page, served as a single static document.
//!
//! Options load once at page start; every selection change calls
//! `/api/chart` for freshly aggregated rows and redraws the two bar
//! series. Updates are serialized client-side: one in flight at a time,
//! a change arriving mid-update re-runs once the current one completes.

pub const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Stars &amp; forks by language</title>
    <script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
    <style>
      body { font-family: system-ui, sans-serif; margin: 0; padding: 24px; color: #1a1a2e; }
      h1 { font-size: 22px; font-weight: 600; margin: 0 0 20px; }
      label { display: block; font-size: 14px; margin-bottom: 6px; }
      #language-dropdown { min-width: 280px; font-size: 14px; padding: 4px; }
      #star-fork-distribution { width: 100%; height: 480px; margin-top: 20px; }
      .hint { font-size: 12px; color: #6b7280; margin-top: 4px; }
    </style>
  </head>
  <body>
    <h1>The amount of github stars &amp; forks depending on the programming languages</h1>
    <label for="language-dropdown">Programming language:</label>
    <select id="language-dropdown" multiple size="8"></select>
    <div class="hint">Hold Ctrl/Cmd to toggle languages.</div>
    <div id="star-fork-distribution"></div>
    <script>
      const dropdown = document.getElementById('language-dropdown');
      const chart = document.getElementById('star-fork-distribution');
      const TITLE = document.querySelector('h1').textContent;

      let updating = false;
      let pending = false;

      async function loadOptions() {
        const response = await fetch('/api/languages');
        const languages = await response.json();
        for (const language of languages) {
          const option = document.createElement('option');
          option.value = language;
          option.textContent = language;
          option.selected = true; // default: all languages observed at startup
          dropdown.appendChild(option);
        }
      }

      function selectedLanguages() {
        return Array.from(dropdown.selectedOptions).map((o) => o.value);
      }

      function draw(rows) {
        const x = rows.map((r) => r.language);
        Plotly.react(
          chart,
          [
            { type: 'bar', x, y: rows.map((r) => r.stars), name: 'Stars' },
            { type: 'bar', x, y: rows.map((r) => r.forks), name: 'Forks' },
          ],
          { title: TITLE, barmode: 'group' }
        );
      }

      async function updateChart() {
        if (updating) {
          pending = true;
          return;
        }
        updating = true;
        try {
          const query = encodeURIComponent(selectedLanguages().join(','));
          const response = await fetch('/api/chart?languages=' + query);
          if (!response.ok) {
            throw new Error('chart request failed with status ' + response.status);
          }
          draw(await response.json());
        } finally {
          updating = false;
          if (pending) {
            pending = false;
            updateChart();
          }
        }
      }

      dropdown.addEventListener('change', updateChart);
      loadOptions().then(updateChart);
    </script>
  </body>
</html>
"#;

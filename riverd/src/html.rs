//! Embedded map page.
//!
//! Kept as a `&'static str` so the server binary needs no filesystem
//! lookups for its own UI. The page talks only to the JSON and SVG
//! endpoints in [`crate::api`].

pub const MAP_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Stream channel profiles</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>
    body { margin: 0; font-family: system-ui, sans-serif; display: flex; height: 100vh; }
    #map { flex: 1 1 55%; }
    #charts { flex: 1 1 45%; overflow-y: auto; padding: 12px; }
    #charts h2 { font-size: 1rem; margin: 8px 0 4px; }
    #charts img { width: 100%; height: auto; border: 1px solid #ddd; }
    #status { color: #888; font-size: 0.85rem; min-height: 1.2em; }
    #error { color: #c44e52; font-size: 0.85rem; }
  </style>
</head>
<body>
  <div id="map"></div>
  <div id="charts">
    <div id="status">Move the mouse near a transect line.</div>
    <div id="error"></div>
    <h2>Lateral cross-section</h2>
    <img id="lateral" alt="lateral cross-section chart" />
    <h2>Longitudinal profile</h2>
    <img id="longitudinal" src="/charts/longitudinal.svg" alt="longitudinal profile chart" />
  </div>
  <script>
    const status = document.getElementById('status');
    const error = document.getElementById('error');
    const lateral = document.getElementById('lateral');
    const longitudinal = document.getElementById('longitudinal');
    let hovered = null;

    const map = L.map('map').setView([47.6738, -120.2100], 16);

    fetch('/api/map-config')
      .then((response) => response.json())
      .then((tiles) => L.tileLayer(tiles.url, { attribution: tiles.attribution }).addTo(map))
      .catch((e) => { error.textContent = String(e); });

    fetch('/api/transects.geojson')
      .then((response) => { if (!response.ok) throw new Error('transects unavailable'); return response.json(); })
      .then((collection) => {
        const overlay = L.geoJSON(collection, { style: { color: '#3674b5', weight: 3 } }).addTo(map);
        map.fitBounds(overlay.getBounds().pad(0.2));
      })
      .catch((e) => { error.textContent = String(e); });

    map.on('mousemove', (event) => {
      const { lat, lng } = event.latlng;
      fetch(`/api/nearest?lat=${lat}&lon=${lng}`)
        .then((response) => response.json())
        .then((body) => {
          const hit = body.data;
          if (!hit || hit.transect_id === hovered) {
            return;
          }
          hovered = hit.transect_id;
          status.textContent =
            `Transect ${hit.transect_id}, ${hit.distance_m.toFixed(1)} m away`;
          lateral.src = `/charts/lateral/${encodeURIComponent(hit.transect_id)}.svg`;
          if (hit.stream_vertex_id !== null) {
            longitudinal.src = `/charts/longitudinal.svg?active_vertex=${hit.stream_vertex_id}`;
          }
        })
        .catch((e) => { error.textContent = String(e); });
    });
  </script>
</body>
</html>
"#;

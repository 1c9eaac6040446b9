use axum::response::Html;

/// GET /ui -> static dashboard page exercising the accounts API.
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

const DASHBOARD_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Ledgerly Dashboard</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    li { margin: 0.25rem 0; }
    button { margin-left: 0.5rem; }
  </style>
</head>
<body>
  <h1>Dashboard</h1>
  <form id="create">
    <input name="name" placeholder="Account name" required>
    <button type="submit">Add account</button>
  </form>
  <ul id="accounts"></ul>
  <script>
    async function refresh() {
      const accounts = await (await fetch('/accounts')).json();
      const list = document.getElementById('accounts');
      list.innerHTML = '';
      for (const acc of accounts) {
        const li = document.createElement('li');
        li.textContent = `#${acc.id} ${acc.name} (${acc.status})`;
        const del = document.createElement('button');
        del.textContent = 'delete';
        del.onclick = async () => {
          await fetch(`/accounts/${acc.id}`, { method: 'DELETE' });
          refresh();
        };
        li.appendChild(del);
        list.appendChild(li);
      }
    }
    document.getElementById('create').onsubmit = async (ev) => {
      ev.preventDefault();
      const name = ev.target.elements.name.value;
      await fetch('/accounts', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name }),
      });
      ev.target.reset();
      refresh();
    };
    refresh();
  </script>
</body>
</html>
"#;

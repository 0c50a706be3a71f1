pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Vaidya</title>
  <link rel="stylesheet" href="/assets/index.css">
</head>
<body>
  <header>
    <h1>Vaidya</h1>
    <p class="tagline">Traditional remedy lookup</p>
  </header>

  <main>
    <section id="search-pane">
      <div class="filter-bar">
        <select id="disease-select">
          <option value="">Any disease</option>
        </select>
        <div id="ingredient-filters" class="checkbox-grid"></div>
        <button id="run-search">Search</button>
        <button id="clear-search" class="secondary">Clear</button>
      </div>
      <p id="search-empty">Select a disease or ingredients to begin.</p>

      <div class="columns">
        <section id="col-disease" class="result-group" hidden>
          <h2>Disease matches</h2>
          <div id="disease-results"></div>
        </section>
        <section id="col-ingredient-diseases" class="result-group" hidden>
          <h2>Diseases for ingredients</h2>
          <div id="ingredient-disease-results"></div>
        </section>
        <section id="col-ingredient-remedies" class="result-group" hidden>
          <h2>Remedies</h2>
          <div id="ingredient-remedies"></div>
        </section>
        <section id="col-intersection" class="result-group" hidden>
          <h2>Remedies matching both filters</h2>
          <div id="intersection-results"></div>
        </section>
      </div>
    </section>

    <section id="chat-pane">
      <h2>Ask the assistant</h2>
      <div id="chat-box"></div>
      <div class="chat-input-row">
        <input id="user-input" type="text" placeholder="Describe your symptoms...">
        <button id="send-btn">Send</button>
      </div>
    </section>
  </main>

  <div id="detail-overlay" hidden>
    <div id="detail-content">
      <button id="detail-close" aria-label="Close">&times;</button>
      <div id="detail-body"></div>
    </div>
  </div>

  <script src="/assets/index.js"></script>
</body>
</html>
"#;

pub const INDEX_CSS: &str = r#"* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: system-ui, sans-serif;
  color: #20312a;
  background: #f4f7f4;
}
header { padding: 1rem 1.5rem; background: #2e5941; color: #fff; }
header h1 { margin: 0; font-size: 1.4rem; }
.tagline { margin: 0.2rem 0 0; opacity: 0.8; }
main { display: grid; grid-template-columns: 2fr 1fr; gap: 1rem; padding: 1rem 1.5rem; }
.filter-bar { display: flex; flex-wrap: wrap; gap: 0.6rem; align-items: flex-start; }
.checkbox-grid { display: flex; flex-wrap: wrap; gap: 0.4rem; max-width: 32rem; }
.checkbox-item { background: #fff; border: 1px solid #cddbd0; border-radius: 4px; padding: 0.2rem 0.5rem; }
button { background: #2e5941; color: #fff; border: none; border-radius: 4px; padding: 0.45rem 1rem; cursor: pointer; }
button.secondary { background: #7c8a80; }
.columns { display: flex; flex-direction: column; gap: 1rem; margin-top: 1rem; }
.result-group h2 { font-size: 1rem; margin: 0 0 0.4rem; }
.result-list { list-style: none; margin: 0; padding: 0; display: grid; gap: 0.6rem; }
.result-card { background: #fff; border: 1px solid #d7e2d9; border-radius: 6px; padding: 0.7rem 0.9rem; cursor: pointer; }
.result-card h3 { margin: 0 0 0.3rem; font-size: 1rem; }
.result-card p { margin: 0.15rem 0; font-size: 0.88rem; }
.nested-remedies { margin: 0.4rem 0 0; padding-left: 1.1rem; font-size: 0.85rem; }
.match-line { color: #4a6354; font-size: 0.8rem; }
.placeholder { color: #5c6b61; font-style: italic; padding: 0.4rem 0; }
.placeholder.error { color: #9c2f2f; }
#chat-box { background: #fff; border: 1px solid #d7e2d9; border-radius: 6px; height: 22rem; overflow-y: auto; padding: 0.7rem; }
.chat-message { margin-bottom: 0.6rem; padding: 0.45rem 0.7rem; border-radius: 6px; font-size: 0.9rem; }
.user-message { background: #e2efe5; }
.bot-message { background: #f1f1ee; }
.bot-message.error { background: #f7e3e3; }
.chat-input-row { display: flex; gap: 0.5rem; margin-top: 0.6rem; }
.chat-input-row input { flex: 1; padding: 0.45rem; border: 1px solid #cddbd0; border-radius: 4px; }
#detail-overlay {
  position: fixed; inset: 0; background: rgba(22, 34, 27, 0.55);
  display: flex; align-items: center; justify-content: center;
}
#detail-content {
  position: relative; background: #fff; border-radius: 8px;
  max-width: 34rem; width: 90%; max-height: 80vh; overflow-y: auto; padding: 1.2rem 1.4rem;
}
#detail-close { position: absolute; top: 0.5rem; right: 0.6rem; background: transparent; color: #20312a; font-size: 1.2rem; }
#detail-body dt { font-weight: 600; margin-top: 0.6rem; }
#detail-body dd { margin: 0.15rem 0 0; }
[hidden] { display: none !important; }
"#;

pub const INDEX_JS: &str = r#"document.addEventListener("DOMContentLoaded", () => {
  const byId = (id) => document.getElementById(id);

  // Search surface. If the host page does not declare the expected
  // structure, the whole feature no-ops instead of failing loudly.
  const diseaseSelect = byId("disease-select");
  const ingredientFilters = byId("ingredient-filters");
  const runSearch = byId("run-search");
  const clearSearch = byId("clear-search");
  const emptyMsg = byId("search-empty");
  const panels = {
    disease: { group: byId("col-disease"), list: byId("disease-results") },
    diseases_for_ingredients: { group: byId("col-ingredient-diseases"), list: byId("ingredient-disease-results") },
    ingredient_remedies: { group: byId("col-ingredient-remedies"), list: byId("ingredient-remedies") },
    intersection: { group: byId("col-intersection"), list: byId("intersection-results") },
  };
  const searchReady = diseaseSelect && ingredientFilters && runSearch && clearSearch && emptyMsg
    && Object.values(panels).every((p) => p.group && p.list);

  const overlay = byId("detail-overlay");
  const overlayContent = byId("detail-content");
  const overlayBody = byId("detail-body");
  const overlayClose = byId("detail-close");
  const overlayReady = overlay && overlayContent && overlayBody && overlayClose;

  // Dismissal is idempotent: closing an already-hidden overlay is a no-op.
  const closeOverlay = (trigger) => {
    if (!overlayReady || overlay.hidden) return;
    overlay.hidden = true;
    overlayBody.innerHTML = "";
    fetch("/api/detail/close", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify({ trigger }),
    }).catch(() => {});
  };
  if (overlayReady) {
    overlayClose.addEventListener("click", () => closeOverlay("close"));
    overlay.addEventListener("click", (event) => {
      if (event.target === overlay) closeOverlay("outside");
    });
    document.addEventListener("keydown", (event) => {
      if (event.key === "Escape") closeOverlay("escape");
    });
  }

  const openDetail = async (panel, index) => {
    if (!overlayReady) return;
    try {
      const res = await fetch(`/api/detail?panel=${encodeURIComponent(panel)}&index=${index}`);
      if (!res.ok) return;
      const data = await res.json();
      overlayBody.innerHTML = data.html;
      overlay.hidden = false;
    } catch (err) {
      console.error("detail error:", err);
    }
  };

  const applyPanels = (data) => {
    for (const [name, panel] of Object.entries(panels)) {
      const dto = data[name];
      panel.group.hidden = !dto.visible;
      panel.list.innerHTML = dto.visible ? dto.html : "";
    }
  };

  const selectedIngredients = () =>
    Array.from(ingredientFilters.querySelectorAll("input:checked")).map((cb) => cb.value);

  const performSearch = async () => {
    const disease = diseaseSelect.value.trim();
    const ingredients = selectedIngredients();
    if (!disease && ingredients.length === 0) {
      emptyMsg.textContent = "Please select a disease or ingredients to begin.";
      return;
    }

    emptyMsg.textContent = "Searching...";
    runSearch.disabled = true;
    try {
      const params = new URLSearchParams();
      if (disease) params.set("disease", disease);
      if (ingredients.length) params.set("ingredients", ingredients.join(","));
      const res = await fetch(`/api/search?${params}`);
      if (!res.ok) throw new Error(`HTTP ${res.status}`);
      const data = await res.json();
      applyPanels(data);
      emptyMsg.textContent = "";
    } catch (err) {
      console.error("search error:", err);
      emptyMsg.textContent = "Search failed. Try again.";
    } finally {
      runSearch.disabled = false;
    }
  };

  const clearFilters = async () => {
    diseaseSelect.value = "";
    ingredientFilters.querySelectorAll("input").forEach((cb) => { cb.checked = false; });
    emptyMsg.textContent = "Select a disease or ingredients to begin.";
    try {
      const res = await fetch("/api/search/clear", { method: "POST" });
      if (res.ok) applyPanels(await res.json());
    } catch (err) {
      console.error("clear error:", err);
    }
  };

  const loadFilters = async () => {
    try {
      const res = await fetch("/api/filters");
      if (!res.ok) throw new Error(`HTTP ${res.status}`);
      const data = await res.json();
      data.diseases.forEach((d) => {
        const option = document.createElement("option");
        option.value = d;
        option.textContent = d;
        diseaseSelect.appendChild(option);
      });
      data.ingredients.forEach((i) => {
        const label = document.createElement("label");
        label.classList.add("checkbox-item");
        const box = document.createElement("input");
        box.type = "checkbox";
        box.value = i;
        label.appendChild(box);
        label.appendChild(document.createTextNode(` ${i}`));
        ingredientFilters.appendChild(label);
      });
    } catch (err) {
      console.error("filter load error:", err);
      emptyMsg.textContent = "Failed to load filters.";
    }
  };

  if (searchReady) {
    loadFilters();
    runSearch.addEventListener("click", performSearch);
    clearSearch.addEventListener("click", clearFilters);
    for (const [name, panel] of Object.entries(panels)) {
      panel.list.addEventListener("click", (event) => {
        const card = event.target.closest("li[data-panel]");
        if (card) openDetail(name, Number(card.dataset.index));
      });
    }
  }

  // Chat surface; independent of the search structure.
  const chatBox = byId("chat-box");
  const userInput = byId("user-input");
  const sendBtn = byId("send-btn");
  if (!chatBox || !userInput || !sendBtn) return;

  const appendMessage = (html, className) => {
    const div = document.createElement("div");
    div.className = `chat-message ${className}`;
    div.innerHTML = html;
    chatBox.appendChild(div);
    chatBox.scrollTop = chatBox.scrollHeight;
    return div;
  };

  const escapeText = (text) => {
    const span = document.createElement("span");
    span.textContent = text;
    return span.innerHTML;
  };

  const sendMessage = async () => {
    const question = userInput.value.trim();
    if (!question) return;
    appendMessage(`<p>${escapeText(question)}</p>`, "user-message");
    userInput.value = "";
    const thinking = appendMessage("Thinking...", "bot-message thinking");
    try {
      const res = await fetch("/api/chat", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ question }),
      });
      if (!res.ok) throw new Error(`HTTP ${res.status}`);
      const data = await res.json();
      thinking.remove();
      appendMessage(data.html, "bot-message");
    } catch (err) {
      console.error("chat error:", err);
      thinking.remove();
      appendMessage("Sorry, something went wrong. Please try again.", "bot-message error");
    }
  };

  sendBtn.addEventListener("click", sendMessage);
  userInput.addEventListener("keypress", (event) => {
    if (event.key === "Enter") sendMessage();
  });
});
"#;

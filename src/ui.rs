use crate::display::DebtView;
use crate::i18n::{translate, Language, MessageKey};
use crate::ledger::{CURRENCY_SYMBOL, INPUT_MAX, INPUT_MIN};

/// Price of the single cookie button on the page.
pub const COOKIE_PRICE: f64 = 5.0;

pub fn render_index(view: &DebtView, lang: Language, payment_url: Option<&str>) -> String {
    let t = |key| translate(lang, key);

    INDEX_HTML
        .replace("{{LANG}}", lang.code())
        .replace("{{DIR}}", lang.dir())
        .replace("{{TITLE}}", t(MessageKey::Title))
        .replace("{{SUBTITLE}}", t(MessageKey::Subtitle))
        .replace("{{LABEL}}", t(view.label_key))
        .replace("{{AMOUNT}}", &view.amount)
        .replace("{{CARD_CLASS}}", view.tone.css_class())
        .replace("{{CARD_STYLE}}", &view.card_style())
        .replace("{{COOKIE}}", t(MessageKey::ITookCookie))
        .replace("{{PAY}}", t(MessageKey::AddPayment))
        .replace("{{CLEAR}}", t(MessageKey::ClearEverything))
        .replace("{{UNDO}}", t(MessageKey::Undo))
        .replace("{{EDIT_LABEL}}", t(MessageKey::EditAmount))
        .replace("{{UNDO_DISABLED}}", if view.can_undo { "" } else { "disabled" })
        .replace("{{LANG_LINKS}}", &language_links(lang))
        .replace("{{PAY_APP}}", &payment_link(lang, payment_url))
        .replace("{{CURRENCY}}", CURRENCY_SYMBOL)
        .replace("{{PRICE}}", &COOKIE_PRICE.to_string())
        .replace("{{INPUT_MIN}}", &INPUT_MIN.to_string())
        .replace("{{INPUT_MAX}}", &INPUT_MAX.to_string())
}

fn language_links(current: Language) -> String {
    Language::ALL
        .into_iter()
        .map(|lang| {
            let class = if lang == current { "lang active" } else { "lang" };
            format!(
                r#"<a class="{class}" href="/?lang={code}" hreflang="{code}">{name}</a>"#,
                code = lang.code(),
                name = lang.native_name(),
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

fn payment_link(lang: Language, url: Option<&str>) -> String {
    let Some(url) = url else {
        return String::new();
    };
    format!(
        r#"<a class="btn-app" href="{href}" target="_blank" rel="noopener">{text}</a>"#,
        href = escape_attr(url),
        text = translate(lang, MessageKey::PayWithApp),
    )
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="{{LANG}}" dir="{{DIR}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      --debt-none-bg: rgba(45, 122, 75, 0.08);
      --debt-none-border: rgba(45, 122, 75, 0.35);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(520px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .langs {
      display: flex;
      gap: 10px;
      font-size: 0.85rem;
    }

    .lang {
      color: #6b645d;
      text-decoration: none;
    }

    .lang.active {
      color: var(--accent-2);
      font-weight: 600;
    }

    .debt-display {
      border: 2px solid transparent;
      border-radius: 22px;
      padding: 22px;
      display: grid;
      gap: 6px;
      text-align: center;
      user-select: none;
      transition: background 200ms ease, border-color 200ms ease;
    }

    .debt-display.error {
      animation: shake 400ms ease;
      border-color: #c63b2b !important;
    }

    .debt-text span {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .debt-amount {
      font-size: 3rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .debt-input {
      font: inherit;
      font-size: 2.4rem;
      width: 5ch;
      text-align: center;
    }

    .actions {
      display: grid;
      gap: 12px;
    }

    .pay-row {
      display: flex;
      gap: 10px;
    }

    .pay-row input {
      flex: 1;
      border-radius: 999px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      padding: 14px 18px;
      font-size: 1rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.45;
      cursor: default;
    }

    .btn-cookie {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-pay {
      background: var(--accent-2);
      color: white;
    }

    .btn-app {
      text-align: center;
      color: var(--accent-2);
      font-weight: 600;
    }

    .btn-clear,
    .btn-undo {
      background: white;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.15);
    }

    @keyframes shake {
      25% { transform: translateX(-6px); }
      75% { transform: translateX(6px); }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <nav class="langs">{{LANG_LINKS}}</nav>
      <h1>{{TITLE}}</h1>
      <p class="subtitle">{{SUBTITLE}}</p>
    </header>

    <section id="debtDisplay" class="{{CARD_CLASS}}" style="{{CARD_STYLE}}">
      <div class="debt-text"><span id="debtLabel">{{LABEL}}</span></div>
      <div>
        {{CURRENCY}}<span id="debtAmount" class="debt-amount" aria-live="polite" title="{{EDIT_LABEL}}">{{AMOUNT}}</span>
      </div>
    </section>

    <section class="actions">
      <form id="cookie-form" method="post" action="/cookie">
        <input type="hidden" name="price" value="{{PRICE}}" />
        <button class="btn-cookie" type="submit">{{COOKIE}} ({{CURRENCY}}{{PRICE}})</button>
      </form>
      <form id="pay-form" class="pay-row">
        <input id="payAmount" type="number" inputmode="numeric" step="1" min="0" />
        <button class="btn-pay" type="submit">{{PAY}}</button>
      </form>
      {{PAY_APP}}
      <form method="post" action="/clear">
        <button class="btn-clear" type="submit">{{CLEAR}}</button>
      </form>
      <form id="undo-form" method="post" action="/undo">
        <button class="btn-undo" id="undoBtn" type="submit" {{UNDO_DISABLED}}>{{UNDO}}</button>
      </form>
    </section>
  </main>

  <script>
    const LANG = '{{LANG}}';
    const LONG_PRESS_DELAY = 800;
    const ERROR_FLASH_DURATION = 400;
    const MAX_INPUT_LENGTH = 4;

    const display = document.getElementById('debtDisplay');
    const labelEl = document.getElementById('debtLabel');
    const undoBtn = document.getElementById('undoBtn');
    const payInput = document.getElementById('payAmount');

    let longPressTimer;
    let isEditing = false;

    const render = (state) => {
      document.getElementById('debtAmount').textContent = state.amount;
      labelEl.textContent = state.label;
      display.className = state.tone === 'debt'
        ? 'debt-display'
        : state.tone === 'settled' ? 'debt-display no-debt' : 'debt-display positive';
      if (state.tone === 'debt') {
        display.style.background = `rgba(255, 0, 0, ${state.background_alpha})`;
        display.style.borderColor = `rgba(255, 0, 0, ${state.border_alpha})`;
      } else {
        display.style.background = 'var(--debt-none-bg)';
        display.style.borderColor = 'var(--debt-none-border)';
      }
      undoBtn.disabled = !state.can_undo;
    };

    const flashError = () => {
      display.classList.add('error');
      setTimeout(() => display.classList.remove('error'), ERROR_FLASH_DURATION);
    };

    const send = async (path, body) => {
      const res = await fetch(`${path}?lang=${LANG}`, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body || {})
      });
      if (!res.ok) {
        flashError();
        return;
      }
      render(await res.json());
    };

    const refresh = async () => {
      const res = await fetch(`/api/state?lang=${LANG}`);
      if (res.ok) {
        render(await res.json());
      }
    };

    document.getElementById('cookie-form').addEventListener('submit', (event) => {
      event.preventDefault();
      send('/api/cookie', { name: 'Cookie', price: {{PRICE}} });
    });

    document.getElementById('pay-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const amount = parseFloat(payInput.value);
      if (Number.isNaN(amount)) {
        return;
      }
      payInput.value = '';
      send('/api/payment', { amount });
    });

    document.getElementById('undo-form').addEventListener('submit', (event) => {
      event.preventDefault();
      send('/api/undo');
    });

    document.querySelector('form[action="/clear"]').addEventListener('submit', (event) => {
      event.preventDefault();
      send('/api/clear');
    });

    const editAmount = () => {
      if (isEditing) return;
      const span = document.getElementById('debtAmount');
      isEditing = true;

      const input = document.createElement('input');
      input.type = 'number';
      input.inputMode = 'numeric';
      input.className = 'debt-input';
      input.min = '{{INPUT_MIN}}';
      input.max = '{{INPUT_MAX}}';
      input.value = span.textContent;
      input.setAttribute('aria-label', '{{EDIT_LABEL}}');

      const finish = async () => {
        if (!isEditing) return;
        isEditing = false;
        const value = input.value;
        input.replaceWith(span);
        if (value.trim() !== '') {
          await send('/api/edit', { value });
        }
      };

      input.addEventListener('beforeinput', (event) => {
        if (event.inputType.startsWith('delete')) return;
        const start = input.selectionStart ?? input.value.length;
        const end = input.selectionEnd ?? start;
        const proposed = input.value.slice(0, start) + (event.data ?? '') + input.value.slice(end);
        if (proposed.replace('-', '').length > MAX_INPUT_LENGTH) {
          event.preventDefault();
        }
      });
      input.addEventListener('keydown', (event) => {
        if (event.key.toLowerCase() === 'e' || event.key === '+' || event.key === ',') {
          event.preventDefault();
        } else if (event.key === 'Enter') {
          event.preventDefault();
          finish();
        }
      });
      input.addEventListener('blur', finish);

      span.replaceWith(input);
      input.focus();
      input.select();
    };

    const startPress = (event) => {
      event.preventDefault();
      clearTimeout(longPressTimer);
      longPressTimer = setTimeout(editAmount, LONG_PRESS_DELAY);
    };
    const cancelPress = () => clearTimeout(longPressTimer);

    display.addEventListener('pointerdown', startPress);
    display.addEventListener('pointerup', cancelPress);
    display.addEventListener('pointerleave', cancelPress);

    refresh();
  </script>
</body>
</html>
"#;

pub const STYLES: &str = r#"
:root {
  --bg: #f7f5f2;
  --surface: #ffffff;
  --ink: #1f1d1a;
  --ink-2: #5c5852;
  --ink-3: #9a958d;
  --line: #e6e1da;
  --accent: #2f2a24;
  --danger: #c2413a;
  --ok: #2f7a4f;
}

* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--ink); font-family: -apple-system, "Segoe UI", sans-serif; }

.muted { color: var(--ink-3); }
.error-text { color: var(--danger); }
.center-screen { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 8px; }

.sign-in-card { background: var(--surface); border: 1px solid var(--line); border-radius: 16px; padding: 40px; width: 360px; text-align: center; }
.brand { display: flex; align-items: center; gap: 10px; font-weight: 600; }
.brand-mark { width: 36px; height: 36px; border-radius: 10px; background: var(--accent); color: #fff; display: inline-flex; align-items: center; justify-content: center; font-weight: 700; }

.btn-primary { background: var(--accent); color: #fff; border: none; border-radius: 8px; padding: 9px 16px; cursor: pointer; }
.btn-primary:disabled { opacity: 0.45; cursor: default; }
.btn-secondary { background: var(--surface); color: var(--ink); border: 1px solid var(--line); border-radius: 8px; padding: 9px 16px; cursor: pointer; }
.btn-ghost { background: none; border: none; color: var(--ink-2); cursor: pointer; }
.btn-wide { width: 100%; margin-top: 16px; }
.btn-signout { background: none; border: 1px solid var(--line); border-radius: 8px; padding: 6px 12px; cursor: pointer; }
.btn-signout.loading { opacity: 0.6; }

.topbar { display: flex; justify-content: space-between; align-items: center; padding: 14px 28px; border-bottom: 1px solid var(--line); background: var(--surface); }
.topbar-user { display: flex; align-items: center; gap: 12px; }
.user-dot { width: 32px; height: 32px; border-radius: 50%; background: var(--line); display: flex; align-items: center; justify-content: center; font-weight: 600; }

.content { max-width: 1080px; margin: 0 auto; padding: 28px; }
.page-head { display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 20px; }
.page-head h1 { margin: 0; }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 20px; }
.stat-card { background: var(--surface); border: 1px solid var(--line); border-radius: 12px; padding: 16px; }
.stat-value { font-size: 26px; font-weight: 700; }
.stat-label { color: var(--ink-2); font-size: 13px; }

.search-bar { display: flex; align-items: center; gap: 8px; background: var(--surface); border: 1px solid var(--line); border-radius: 10px; padding: 8px 12px; margin-bottom: 20px; }
.search-input { flex: 1; border: none; outline: none; font-size: 15px; background: transparent; }
.search-input::placeholder { color: var(--ink-3); }

.new-contact-form { background: var(--surface); border: 1px solid var(--line); border-radius: 12px; padding: 20px; margin-bottom: 20px; }
.form-head { display: flex; justify-content: space-between; align-items: center; }
.form-fields { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; }
.field { display: flex; flex-direction: column; gap: 4px; }
.field-label { font-size: 12px; color: var(--ink-2); }
.field-input { border: 1px solid var(--line); border-radius: 8px; padding: 8px 10px; font-size: 14px; }
.field-input::placeholder { color: var(--ink-3); }
.form-actions { display: flex; justify-content: flex-end; gap: 8px; margin-top: 14px; }

.section-title { font-size: 15px; color: var(--ink-2); font-weight: 600; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 14px; }
.empty-state { text-align: center; padding: 60px 0; }

.contact-card { background: var(--surface); border: 1px solid var(--line); border-radius: 12px; padding: 16px; display: flex; flex-direction: column; gap: 10px; }
.contact-card.deleting { opacity: 0.5; }
.contact-card.editing { gap: 8px; }
.card-head { display: flex; align-items: center; gap: 10px; }
.avatar { width: 38px; height: 38px; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-weight: 700; color: var(--ink); }
.contact-name { font-weight: 600; }
.contact-detail { display: flex; gap: 8px; font-size: 14px; color: var(--ink-2); cursor: pointer; }
.card-actions { display: flex; justify-content: flex-end; gap: 6px; }
.card-action-btn { background: none; border: 1px solid var(--line); border-radius: 6px; padding: 4px 10px; cursor: pointer; }
.card-action-btn.danger { color: var(--danger); }

.toast { position: fixed; bottom: 24px; left: 50%; transform: translateX(-50%); padding: 10px 18px; border-radius: 10px; color: #fff; display: flex; gap: 8px; }
.toast.success { background: var(--ok); }
.toast.error { background: var(--danger); }
"#;

//! Global CSS styles for Punchdeck.
//!
//! Card positions come from inline transforms computed by the layout
//! engine; this sheet only handles look and feel.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0f1020;
  --bg-raised: #181a2e;
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);
  --token-empty: rgba(0, 0, 0, 0.18);
  --token-filled: #ffb347;
  --danger: #ff3366;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  --card-width: 300px;
  --card-height: 380px;
  --radius: 18px;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: radial-gradient(circle at 50% 30%, var(--bg-raised), var(--bg));
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
  user-select: none;
}

/* === Stage === */
.stage {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  width: 100vw;
  height: 100vh;
  outline: none;
  touch-action: pan-y;
}

.viewport {
  position: relative;
  flex: 1;
  height: 100%;
  perspective: 1200px;
  overflow: hidden;
}

.rail {
  position: absolute;
  inset: 0;
  transform-style: preserve-3d;
}

/* === Deck Status === */
.deck-status {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  color: var(--text-secondary);
  font-size: 1.1rem;
}

.deck-status.failed {
  color: var(--danger);
}

.btn-retry {
  padding: 0.5rem 1.25rem;
  border: 1px solid currentColor;
  border-radius: 999px;
  background: transparent;
  color: var(--text-primary);
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-retry:hover {
  background: rgba(255, 255, 255, 0.08);
}

/* === Paging Buttons === */
.nav-btn {
  z-index: 2000;
  width: 44px;
  height: 44px;
  border: none;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.12);
  color: var(--text-primary);
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
  transition: background var(--transition-fast), opacity var(--transition-fast);
}

.nav-btn:hover:not(:disabled) {
  background: rgba(255, 255, 255, 0.22);
}

.nav-btn:disabled {
  opacity: 0.3;
  cursor: default;
}

/* === Cards === */
.card {
  position: absolute;
  top: 50%;
  left: 50%;
  width: var(--card-width);
  height: var(--card-height);
  border-radius: var(--radius);
  background: #fff;
  color: #222;
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35);
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal), opacity var(--transition-normal);
  outline: none;
}

.card.is-front {
  box-shadow: 0 28px 60px rgba(0, 0, 0, 0.5);
}

.card:focus-visible {
  box-shadow: 0 0 0 3px var(--token-filled), 0 20px 40px rgba(0, 0, 0, 0.35);
}

.stripe {
  height: 110px;
  padding: 1.25rem;
  display: flex;
  align-items: flex-end;
  background: linear-gradient(135deg, var(--c1), var(--c2));
}

.stripe .title {
  color: #fff;
  font-size: 1.5rem;
  font-weight: 700;
  text-shadow: 0 2px 6px rgba(0, 0, 0, 0.25);
}

.body {
  padding: 1rem 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.meta {
  display: flex;
  justify-content: space-between;
  align-items: center;
  gap: 0.5rem;
}

.req {
  font-weight: 600;
  font-size: 0.95rem;
}

.brand {
  display: flex;
  align-items: center;
  gap: 0.35rem;
  color: #666;
  font-size: 0.8rem;
}

.logo {
  font-size: 1.25rem;
}

.body p {
  color: #555;
  font-size: 0.9rem;
}

/* === Punch Tokens === */
.punches {
  display: grid;
  grid-template-columns: repeat(5, 1fr);
  gap: 0.5rem;
  margin-top: 0.25rem;
}

.token {
  display: flex;
  align-items: center;
  justify-content: center;
  aspect-ratio: 1;
  border-radius: 50%;
  color: var(--token-empty);
  background: rgba(0, 0, 0, 0.05);
  transition: color var(--transition-fast), transform var(--transition-fast);
}

.token svg {
  width: 70%;
  height: 70%;
}

.token:hover {
  transform: scale(1.08);
}

.token.filled {
  color: var(--token-filled);
  background: rgba(255, 179, 71, 0.15);
}

/* === Narrow Viewports === */
@media (max-width: 560px) {
  :root {
    --card-width: 250px;
    --card-height: 340px;
  }

  .nav-btn {
    position: absolute;
    bottom: 1.5rem;
  }

  .nav-prev {
    left: 30%;
  }

  .nav-next {
    right: 30%;
  }
}

@media (prefers-reduced-motion: reduce) {
  .card,
  .rail,
  .token {
    transition: none !important;
  }
}
"#;

//! Global CSS styles for the portfolio.
//!
//! Dark zinc canvas, neon accents, glass panels.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --zinc-950: #09090b;
  --zinc-900: #18181b;
  --panel: rgba(24, 24, 27, 0.6);
  --border: rgba(255, 255, 255, 0.1);

  /* Accents */
  --cyan: #67e8f9;
  --green: #86efac;
  --purple: #d8b4fe;
  --orange: #fdba74;
  --red: #fca5a5;
  --blue: #93c5fd;
  --fuchsia: #f0abfc;

  /* Glows */
  --cyan-glow: rgba(56, 189, 248, 0.3);
  --purple-glow: rgba(168, 85, 247, 0.3);
  --orange-glow: rgba(251, 146, 60, 0.4);

  /* Text */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.7);
  --text-muted: rgba(255, 255, 255, 0.5);

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Layout */
  --header-height: 72px;
  --radius: 1.25rem;

  /* Transitions */
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
  scroll-behavior: smooth;
}

body {
  background: var(--zinc-950);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

@media (prefers-reduced-motion: reduce) {
  html { scroll-behavior: auto; }
  *, *::before, *::after {
    animation-duration: 0.01ms !important;
    transition-duration: 0.01ms !important;
  }
}

/* === Page Layout === */
.page {
  min-height: 100vh;
}

.page-main {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1rem 4rem;
}

.page-section {
  margin-top: 3.5rem;
  scroll-margin-top: calc(var(--header-height) + 1.5rem);
}

.page-footer {
  border-top: 1px solid var(--border);
  padding: 1.5rem 1rem;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.875rem;
}

.empty-state {
  color: var(--text-muted);
  font-style: italic;
  padding: 1.5rem 0;
}

/* === Accents === */
.accent-cyan   { --accent: var(--cyan); }
.accent-green  { --accent: var(--green); }
.accent-purple { --accent: var(--purple); }
.accent-orange { --accent: var(--orange); }
.accent-red    { --accent: var(--red); }
.accent-blue   { --accent: var(--blue); }

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 50;
  height: var(--header-height);
  background: rgba(9, 9, 11, 0.75);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.nav-inner {
  max-width: 72rem;
  height: 100%;
  margin: 0 auto;
  padding: 0 1rem;
  display: flex;
  align-items: center;
  gap: 1rem;
}

.nav-brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-weight: 600;
}

.nav-avatar {
  padding: 0;
  border: none;
  background: none;
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.nav-avatar:hover {
  transform: scale(1.05);
}

.profile-avatar {
  display: grid;
  place-items: center;
  width: 2.5rem;
  height: 2.5rem;
  overflow: hidden;
  border-radius: 0.75rem;
  border: 2px solid rgba(255, 255, 255, 0.2);
  background: radial-gradient(circle at 35% 30%, var(--cyan-glow), transparent 55%);
}

.profile-avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.profile-avatar-initial {
  color: var(--cyan);
  font-weight: 700;
}

.profile-avatar-large {
  width: 12rem;
  height: 12rem;
  border-radius: 1rem;
  border-width: 4px;
  box-shadow: 0 0 40px var(--cyan-glow);
}

.profile-avatar-large .profile-avatar-initial {
  font-size: 3.75rem;
  color: rgba(255, 255, 255, 0.4);
}

.nav-brand-status {
  font-size: 0.75rem;
  font-weight: 500;
  color: var(--cyan);
  opacity: 0.7;
}

.profile-card-body {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 0;
}

.profile-card-name {
  font-size: 1.875rem;
  font-weight: 700;
}

.profile-card-title {
  font-size: 1.125rem;
  color: var(--cyan);
}

.profile-card-line {
  width: 100%;
  max-width: 20rem;
  height: 1px;
  margin-top: 1rem;
  background: linear-gradient(90deg, transparent, var(--cyan-glow), transparent);
}

.mobile-menu-profile {
  margin: 0 1rem 0.5rem;
  padding: 0.75rem 1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--cyan-glow);
  background: rgba(103, 232, 249, 0.05);
  color: var(--cyan);
  text-align: left;
  cursor: pointer;
}

.nav-links {
  display: flex;
  gap: 0.25rem;
  margin: 0 auto;
}

.nav-link {
  position: relative;
  padding: 0.5rem 0.75rem;
  border-radius: 0.75rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.05);
}

.nav-link.active {
  color: var(--cyan);
  background: rgba(103, 232, 249, 0.08);
  box-shadow: 0 0 0 1px var(--cyan-glow);
}

.nav-actions {
  display: flex;
  gap: 0.5rem;
}

.nav-menu-toggle {
  display: none;
  font-size: 1.25rem;
  padding: 0.25rem 0.5rem;
}

/* === Mobile Menu === */
.mobile-menu-backdrop {
  position: fixed;
  inset: 0;
  z-index: 60;
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
}

.mobile-menu {
  position: fixed;
  top: 0;
  left: 0;
  bottom: 0;
  z-index: 61;
  width: min(18rem, 80vw);
  padding: 1.25rem;
  background: var(--zinc-950);
  border-right: 1px solid var(--border);
  animation: slide-in var(--transition-normal);
}

.mobile-menu-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.mobile-menu-title {
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.mobile-menu-link {
  padding: 0.75rem 1rem;
  border-radius: 0.75rem;
  color: var(--text-secondary);
}

.mobile-menu-link.active {
  color: var(--cyan);
  background: rgba(103, 232, 249, 0.08);
}

@keyframes slide-in {
  from { transform: translateX(-100%); }
  to { transform: translateX(0); }
}

@media (max-width: 767px) {
  .nav-links, .nav-actions { display: none; }
  .nav-menu-toggle { display: block; }
}

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-neon {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.6rem 1rem;
  border-radius: 0.9rem;
  font-size: 0.875rem;
  font-weight: 600;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast), background var(--transition-fast);
}

.btn-primary {
  background: var(--text-primary);
  color: var(--zinc-950);
}

.btn-ghost {
  border: 1px solid var(--border);
  background: rgba(255, 255, 255, 0.04);
}

.btn-ghost.copied {
  border-color: rgba(134, 239, 172, 0.3);
  background: rgba(134, 239, 172, 0.1);
  color: var(--green);
}

.btn-neon {
  border: 1px solid var(--cyan-glow);
  background: rgba(103, 232, 249, 0.1);
  color: var(--cyan);
  box-shadow: 0 0 24px -8px var(--cyan-glow);
}

.btn-primary:hover, .btn-ghost:hover, .btn-neon:hover {
  transform: translateY(-1px);
}

.btn-neon:hover {
  box-shadow: 0 0 32px -6px var(--cyan-glow);
}

.icon-btn {
  display: grid;
  place-items: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: rgba(255, 255, 255, 0.04);
  font-size: 1.25rem;
  line-height: 1;
}

/* === Pills === */
.pill-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 0.75rem 0;
}

.pill {
  position: relative;
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.3rem 0.75rem;
  border-radius: 999px;
  border: 1px solid color-mix(in srgb, var(--accent, var(--cyan)) 30%, transparent);
  background: color-mix(in srgb, var(--accent, var(--cyan)) 8%, transparent);
  color: var(--accent, var(--cyan));
  font-size: 0.75rem;
  font-weight: 600;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.pill:hover {
  transform: translateY(-2px);
  box-shadow: 0 0 0 1px var(--accent, var(--cyan));
}

.pill-glow {
  position: absolute;
  inset: 0;
  border-radius: inherit;
  opacity: 0;
  box-shadow: 0 0 18px var(--accent, var(--cyan));
  transition: opacity var(--transition-fast);
}

.pill:hover .pill-glow {
  opacity: 0.35;
}

/* === Section Title === */
.section-title {
  margin-bottom: 1.5rem;
}

.section-kicker {
  display: inline-block;
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  border: 1px solid color-mix(in srgb, var(--accent) 25%, transparent);
  color: var(--accent);
  font-size: 0.7rem;
  font-weight: 700;
  letter-spacing: 0.12em;
}

.section-heading {
  margin-top: 0.75rem;
  font-size: clamp(1.75rem, 4vw, 2.5rem);
  font-weight: 650;
  line-height: 1.15;
}

.section-desc {
  margin-top: 0.5rem;
  color: var(--text-secondary);
  max-width: 40rem;
}

/* === Hero === */
.hero {
  position: relative;
  max-width: 72rem;
  margin: 0 auto;
  padding: 3rem 1rem;
}

.hero-glow {
  position: absolute;
  inset: 0;
  z-index: -1;
  border-radius: 1.5rem;
  background: linear-gradient(135deg, rgba(103, 232, 249, 0.1), rgba(216, 180, 254, 0.1), rgba(240, 171, 252, 0.1));
  filter: blur(48px);
  opacity: 0.3;
}

.hero-grid {
  display: grid;
  gap: 2rem;
  align-items: center;
}

@media (min-width: 768px) {
  .hero-grid { grid-template-columns: 1fr 1fr; }
}

.hero-kicker {
  display: inline-block;
  margin-bottom: 1rem;
  padding: 0.35rem 1rem;
  border-radius: 999px;
  border: 1px solid rgba(103, 232, 249, 0.2);
  background: rgba(103, 232, 249, 0.05);
  color: var(--cyan);
  font-size: 0.75rem;
  font-weight: 600;
}

.hero-title {
  font-size: clamp(2.25rem, 6vw, 3.75rem);
  font-weight: 600;
  line-height: 1.06;
}

.hero-title-accent {
  background: linear-gradient(90deg, var(--cyan), var(--fuchsia), var(--purple));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-summary {
  margin-top: 1rem;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.hero-focus {
  display: grid;
  gap: 0.75rem;
  padding: 1.25rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--panel);
  box-shadow: 0 30px 120px -70px rgba(168, 85, 247, 0.65);
}

@media (min-width: 640px) {
  .hero-focus { grid-template-columns: 1fr 1fr; }
}

.focus-card {
  padding: 1rem;
  border-radius: 1rem;
  border: 1px solid color-mix(in srgb, var(--accent) 20%, transparent);
  background: color-mix(in srgb, var(--accent) 5%, transparent);
}

.focus-card-title {
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--accent);
}

.focus-card-headline {
  margin-top: 0.25rem;
  font-weight: 600;
}

.focus-card-detail {
  margin-top: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Projects === */
.project-grid {
  display: grid;
  gap: 1rem;
}

@media (min-width: 768px) {
  .project-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .project-grid:not(.featured) { grid-template-columns: repeat(3, 1fr); }
}

.project-card {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.25rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--panel);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
  box-shadow: 0 20px 60px -30px var(--purple-glow);
}

.project-card.featured {
  border-color: rgba(134, 239, 172, 0.25);
}

.project-card > button {
  align-self: flex-start;
  margin-top: auto;
}

.project-name {
  font-size: 1.125rem;
  font-weight: 600;
}

.project-summary {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.impact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr));
  gap: 0.5rem;
}

.impact-item {
  padding: 0.75rem;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: rgba(9, 9, 11, 0.4);
}

.impact-item dt {
  font-size: 0.7rem;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.impact-item dd {
  font-weight: 700;
  color: var(--green);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: rgba(0, 0, 0, 0.85);
  backdrop-filter: blur(6px);
}

.modal-panel {
  position: relative;
  display: flex;
  flex-direction: column;
  width: 100%;
  max-width: 48rem;
  max-height: 90vh;
  overflow: hidden;
  border-radius: 1.5rem;
  border: 1px solid rgba(216, 180, 254, 0.3);
  background: var(--zinc-950);
  box-shadow: 0 0 80px var(--purple-glow);
  outline: none;
}

.modal-header-bar {
  height: 3px;
  background: linear-gradient(90deg, var(--cyan), var(--purple), var(--fuchsia));
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.modal-kicker {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.modal-body {
  flex: 1;
  min-height: 0;
  overflow-y: auto;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.modal-lead {
  color: var(--text-secondary);
}

.modal-block h4 {
  margin-bottom: 0.5rem;
  font-size: 0.8rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.modal-links {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.detail-list {
  padding-left: 1.25rem;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.detail-list li + li {
  margin-top: 0.25rem;
}

.system-mode {
  border-color: rgba(103, 232, 249, 0.4);
  box-shadow: 0 0 100px var(--cyan-glow);
}

.system-mode .modal-title { color: var(--cyan); }

.deep-dive {
  border-color: rgba(253, 186, 116, 0.4);
  box-shadow: 0 0 100px var(--orange-glow);
}

.deep-dive .modal-title { color: var(--orange); }

.deep-dive .modal-header-bar {
  background: linear-gradient(90deg, var(--orange), #fde047, var(--orange));
}

.target-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
  gap: 0.75rem;
}

.target-card {
  padding: 1rem;
  border-radius: 0.75rem;
  border: 1px solid rgba(103, 232, 249, 0.2);
  background: rgba(9, 9, 11, 0.4);
}

.target-label { font-weight: 600; font-size: 0.875rem; }
.target-value { font-size: 1.5rem; font-weight: 700; color: var(--cyan); }
.target-budget { font-size: 0.75rem; color: var(--text-muted); }

.stack-row {
  padding: 0.75rem 1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: rgba(9, 9, 11, 0.4);
}

.stack-row + .stack-row { margin-top: 0.5rem; }

.stack-layer {
  font-weight: 600;
  margin-bottom: 0.25rem;
}

.stack-row p {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Experience Timeline === */
.timeline {
  position: relative;
  padding-left: 2rem;
}

.timeline-line {
  position: absolute;
  left: 0.7rem;
  top: 0;
  bottom: 0;
  width: 1px;
  background: rgba(255, 255, 255, 0.1);
}

.timeline-entry {
  position: relative;
  padding-bottom: 1.5rem;
}

.timeline-node {
  position: absolute;
  left: -1.65rem;
  top: 1.5rem;
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  border: 2px solid var(--zinc-950);
  background: rgba(255, 255, 255, 0.4);
}

.timeline-node.marker {
  background: var(--text-primary);
  box-shadow: 0 0 18px var(--cyan-glow);
  cursor: pointer;
  animation: pulse 2.4s ease-in-out infinite;
}

@keyframes pulse {
  0%, 100% { transform: scale(1); opacity: 0.85; }
  50% { transform: scale(1.18); opacity: 1; }
}

.timeline-card {
  padding: 1.25rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--panel);
}

.timeline-meta {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  font-size: 0.75rem;
  color: var(--text-muted);
}

.timeline-dates {
  font-family: var(--font-mono);
  color: var(--cyan);
}

.timeline-title {
  margin-top: 0.25rem;
  font-size: 1.125rem;
  font-weight: 600;
}

.timeline-company {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.timeline-summary {
  margin: 0.5rem 0;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

/* === Skills === */
.skill-grid, .principle-grid {
  display: grid;
  gap: 1rem;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
}

.skill-card, .principle-card {
  padding: 1.25rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--panel);
}

.skill-card-header {
  display: flex;
  align-items: center;
  gap: 0.6rem;
}

.skill-card-header h3 {
  color: var(--text-primary);
  font-size: 1rem;
}

/* === How I Work === */
.principle-icon {
  display: inline-grid;
  place-items: center;
  width: 2.75rem;
  height: 2.75rem;
  margin-bottom: 0.75rem;
  border-radius: 0.9rem;
  border: 1px solid rgba(252, 165, 165, 0.3);
  color: var(--red);
}

.principle-card h3 {
  font-size: 1rem;
  margin-bottom: 0.35rem;
}

.principle-card p {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

/* === Theme Validation === */
.character-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.character-chip {
  padding: 0.5rem 1rem;
  border-radius: 999px;
  border: 1px solid color-mix(in srgb, var(--accent) 30%, transparent);
  color: var(--accent);
  font-size: 0.875rem;
  transition: background var(--transition-fast);
}

.character-chip.active {
  background: color-mix(in srgb, var(--accent) 12%, transparent);
  box-shadow: 0 0 24px -8px var(--accent);
}

.character-card {
  padding: 1.25rem;
  border-radius: var(--radius);
  border: 1px solid color-mix(in srgb, var(--accent) 30%, transparent);
  background: color-mix(in srgb, var(--accent) 5%, transparent);
}

.character-card h3 {
  margin: 0.75rem 0 0.25rem;
  color: var(--accent);
}

.character-message {
  font-style: italic;
  color: var(--text-secondary);
}

/* === Contact === */
.contact-grid {
  display: grid;
  gap: 1rem;
}

@media (min-width: 768px) {
  .contact-grid { grid-template-columns: 1fr 1fr; }
}

.contact-card {
  padding: 1.5rem;
  border-radius: var(--radius);
  border: 1px solid color-mix(in srgb, var(--accent) 30%, transparent);
  background: var(--panel);
}

.contact-label {
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--accent);
}

.contact-value {
  margin-top: 0.25rem;
  font-size: 1.125rem;
  font-weight: 600;
  word-break: break-word;
}

.contact-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 1rem;
}

/* === Code Word Reveal === */
.reveal-breaking {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: grid;
  place-items: center;
  background: #000;
  animation: shatter 2.5s steps(12) forwards;
}

.reveal-scanlines {
  position: absolute;
  inset: 0;
  background: repeating-linear-gradient(0deg, transparent, transparent 2px, rgba(103, 232, 249, 0.15) 2px, rgba(103, 232, 249, 0.15) 4px);
  pointer-events: none;
}

.reveal-glitch {
  position: relative;
  font-family: var(--font-mono);
  font-size: clamp(1.5rem, 5vw, 3rem);
  font-weight: 700;
  letter-spacing: 0.2em;
  color: var(--cyan);
  text-shadow: 2px 0 var(--fuchsia), -2px 0 var(--cyan);
  animation: glitch 0.3s infinite;
}

@keyframes glitch {
  0% { transform: translate(0); }
  25% { transform: translate(-2px, 1px); }
  50% { transform: translate(2px, -1px); }
  75% { transform: translate(-1px, -2px); }
  100% { transform: translate(0); }
}

@keyframes shatter {
  0% { opacity: 0; }
  10% { opacity: 1; }
  90% { opacity: 1; clip-path: inset(0); }
  100% { opacity: 0; clip-path: inset(50% 0); }
}

.reveal-message {
  position: fixed;
  left: 50%;
  bottom: 2rem;
  z-index: 200;
  transform: translateX(-50%);
  max-width: min(28rem, 90vw);
  padding: 1rem 1.5rem;
  border-radius: 1rem;
  border: 1px solid var(--cyan-glow);
  background: rgba(9, 9, 11, 0.95);
  box-shadow: 0 0 60px var(--cyan-glow);
  text-align: center;
}

.reveal-message-title {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--cyan);
}

.reveal-message p {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

/* === Hint Tooltip === */
.hint-tooltip {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 90;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem 0.75rem 0.75rem 1rem;
  border-radius: 1rem;
  border: 1px solid rgba(216, 180, 254, 0.3);
  background: rgba(9, 9, 11, 0.9);
  box-shadow: 0 0 40px -10px var(--purple-glow);
  font-size: 0.875rem;
  color: var(--purple);
}

.icon {
  flex-shrink: 0;
}
"#;

//! Global CSS styles for the Connecting Minds site.
//!
//! Light neutral surfaces, green calls to action.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NEUTRALS */
  --white: #ffffff;
  --neutral-50: #fafafa;
  --neutral-100: #f5f5f5;
  --neutral-400: #a3a3a3;
  --neutral-600: #525252;
  --neutral-700: #404040;
  --neutral-800: #262626;
  --neutral-900: #171717;
  --black: #000000;

  /* ACCENT */
  --green: #22c55e;
  --backdrop: rgba(0, 0, 0, 0.2);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
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
  background: var(--white);
  color: var(--neutral-800);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  color: var(--neutral-900);
}

.tagline {
  margin-top: 0.5rem;
  color: var(--neutral-600);
}

.section-header {
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 1.5rem;
}

/* === Layout === */
.home {
  max-width: 64rem;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.hero {
  text-align: center;
  margin-bottom: 3rem;
}

.section {
  margin-bottom: 4rem;
}

/* === Buttons === */
.btn-pill,
.btn-solid {
  display: inline-block;
  padding: 0.5rem 1rem;
  font-size: var(--text-sm);
  font-weight: 700;
  border: none;
  border-radius: 9999px;
  cursor: pointer;
  text-decoration: none;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-pill {
  background: var(--neutral-100);
  color: var(--black);
}

.btn-pill:hover {
  background: var(--green);
  color: var(--white);
}

.btn-solid {
  padding: 0.75rem 1rem;
  background: var(--green);
  color: var(--white);
}

.icon-btn {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: var(--white);
  color: var(--black);
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
  cursor: pointer;
  transition: transform var(--transition-fast);
}

.icon-btn:hover {
  transform: scale(1.05);
}

.icon-btn:active {
  transform: scale(0.95);
}

.icon {
  width: 1.25rem;
  height: 1.25rem;
}

.icon-fade {
  animation: fade-in var(--transition-normal);
}

/* === Expandable Cards: list === */
.cards-list {
  list-style: none;
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.card-row {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  align-items: center;
  padding: 1rem;
  border-radius: 0.75rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.card-row:hover {
  background: var(--neutral-50);
}

.card-row__main {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.card-row__thumb img {
  width: 10rem;
  height: 10rem;
  border-radius: 0.5rem;
  object-fit: cover;
  object-position: top;
}

.card-row__title {
  font-weight: 500;
  color: var(--neutral-800);
  text-align: center;
}

.card-row__description {
  color: var(--neutral-600);
  text-align: center;
}

.card-row .btn-pill {
  margin-top: 1rem;
}

@media (min-width: 768px) {
  .card-row,
  .card-row__main {
    flex-direction: row;
  }

  .card-row__thumb img {
    width: 3.5rem;
    height: 3.5rem;
  }

  .card-row__title,
  .card-row__description {
    text-align: left;
  }

  .card-row .btn-pill {
    margin-top: 0;
  }
}

/* === Expandable Cards: overlay === */
.cards-backdrop {
  position: fixed;
  inset: 0;
  background: var(--backdrop);
  z-index: 10;
  animation: fade-in var(--transition-normal);
}

.card-overlay {
  position: fixed;
  inset: 0;
  display: grid;
  place-items: center;
  z-index: 100;
}

.card-overlay__controls .back-btn {
  position: absolute;
  top: 1rem;
  left: 1rem;
  z-index: 50;
}

.card-overlay__controls .close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 50;
}

@media (min-width: 1024px) {
  .card-overlay__controls .close-btn {
    display: none;
  }
}

.card-panel {
  width: 100%;
  max-width: 500px;
  height: 100%;
  display: flex;
  flex-direction: column;
  background: var(--white);
  overflow: hidden;
  animation: card-grow var(--transition-normal);
}

@media (min-width: 640px) {
  .card-panel {
    border-radius: 1.5rem;
  }
}

@media (min-width: 768px) {
  .card-panel {
    height: fit-content;
    max-height: 90%;
  }
}

.card-panel__image img {
  width: 100%;
  height: 20rem;
  object-fit: cover;
  object-position: top;
}

.card-panel__header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  padding: 1rem;
}

.card-panel__title {
  font-weight: 700;
  color: var(--neutral-700);
}

.card-panel__description {
  color: var(--neutral-600);
}

.card-panel__detail {
  position: relative;
  padding: 1rem 1rem 2.5rem;
  height: 10rem;
  overflow: auto;
  display: flex;
  flex-direction: column;
  gap: 1rem;
  font-size: var(--text-xs);
  color: var(--neutral-600);
  mask: linear-gradient(to bottom, white, white, transparent);
  scrollbar-width: none;
  animation: fade-in var(--transition-slow);
}

@media (min-width: 768px) {
  .card-panel__detail {
    height: fit-content;
    font-size: var(--text-sm);
  }
}

@media (min-width: 1024px) {
  .card-panel__detail {
    font-size: var(--text-base);
  }
}

::view-transition-group(*) {
  animation-duration: 300ms;
}

/* === Testimonials === */
.testimonials {
  display: grid;
  grid-template-columns: 1fr;
  gap: 5rem;
  max-width: 56rem;
  margin: 0 auto;
}

@media (min-width: 768px) {
  .testimonials {
    grid-template-columns: 1fr 1fr;
  }
}

.testimonials__stack {
  position: relative;
  height: 20rem;
}

.testimonials__portrait {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  border-radius: 1.5rem;
  object-fit: cover;
  object-position: center;
  opacity: 0.7;
  transform-origin: bottom;
  transition: transform var(--transition-slow), opacity var(--transition-slow);
}

.testimonials__portrait.active {
  opacity: 1;
}

.testimonials__body {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  padding: 1rem 0;
}

.testimonials__text {
  animation: slide-up var(--transition-normal);
}

.testimonials__name {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--black);
}

.testimonials__designation {
  font-size: var(--text-sm);
  color: var(--neutral-600);
}

.testimonials__quote {
  margin-top: 2rem;
  font-size: var(--text-lg);
  color: var(--neutral-600);
}

.testimonials__word {
  display: inline-block;
  opacity: 0;
  filter: blur(10px);
  animation: word-reveal 200ms ease-in-out forwards;
}

.testimonials__nav {
  display: flex;
  gap: 1rem;
  padding-top: 3rem;
}

.nav-btn {
  width: 1.75rem;
  height: 1.75rem;
  padding: 0.25rem;
  background: var(--neutral-100);
  box-shadow: none;
}

/* === Animations === */
@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes card-grow {
  from { opacity: 0; transform: scale(0.96); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes slide-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes word-reveal {
  from { opacity: 0; filter: blur(10px); transform: translateY(5px); }
  to { opacity: 1; filter: blur(0); transform: translateY(0); }
}
"#;

//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Logarithmic grids](#logarithmic-grids)
//! - [Shooting](#shooting)
//! - [Root refinement](#root-refinement)
//! - [Normalization](#normalization)
//!
//! # Background
//! For a central potential *V*(*r*), the wavefunction is separable into radial
//! and angular components *ψ*(*r*, *θ*, *φ*) = *R*(*r*) *Y*(*θ*, *φ*) with *Y*
//! being a spherical harmonic. The radial part obeys
//! ```text
//!    1  1  ∂    ∂²                      l (l + 1)
//! - --- -- (2 r -- + ---) R(r) + V(r) R(r) + --------- R(r) = E R(r)
//!    2  r²      ∂r   ∂r²                      2 r²
//! ```
//! which is not of a form directly solvable by the Numerov method. Switching
//! focus to the reduced radial function *u*(*r*) ≡ *r* *R*(*r*) instead gives
//! ```text
//!  ∂²u
//!  --- = -k(r) u(r)
//!  ∂r²
//!
//!                      l (l + 1)
//! k(r) = 2 (E - V(r) - ---------)
//!                        2 r²
//! ```
//! with boundary conditions *u*(0) = 0 and *u*(*r*) → 0 as *r* → ∞. Bound
//! states exist only for a discrete set of energies *E* < 0 (for potentials
//! that vanish at infinity).
//!
//! Numerov's method[^1] is a three-point integration scheme for equations of
//! this form. Assuming a discretization
//! ```text
//! r[i] = i δr, i ∊ {0, ..., N}
//! u[i] = u(r[i])
//! k[i] = k(r[i])
//! ```
//! it reads
//! ```text
//!      δr²                             5 δr²                   δr²
//! (1 + --- k[i - 1]) u[i - 1] = 2 (1 - ----- k[i]) u[i] - (1 + --- k[i + 1]) u[i + 1]
//!      12                               12                     12
//! ```
//! which has a local error term of only *O*(*δr*⁶), and can be run in either
//! direction over the grid.
//!
//! # Units
//! Everything in this crate is expressed in Hartree atomic units, where
//! *ħ* = *m*<sub>*e*</sub> = *e* = 4π*ε*<sub>0</sub> = 1. Lengths are then
//! measured in Bohr radii *a*<sub>0</sub> and energies in Hartree
//! *E*<sub>*h*</sub> = 2 Ry ≈ 27.2 eV, and the hydrogen spectrum is simply
//! *E*<sub>*n*</sub> = -1 / 2 *n*². The Coulomb potential of a bare nucleus
//! of charge *Z* is -*Z* / *r*.
//!
//! A finite nuclear mass *M* can be accounted for after the fact by replacing
//! the electron mass with the reduced mass *μ* = *M* / (*m*<sub>*e*</sub> +
//! *M*): energies scale as *μ* and lengths as 1 / *μ*.
//!
//! Items in [`units`][crate::units] are provided to handle conversion to and
//! from SI and spectroscopic units.
//!
//! # Logarithmic grids
//! Bound-state wavefunctions vary most rapidly near the origin, where the
//! potential is deepest. A uniform grid fine enough to resolve this region
//! wastes most of its points in the slowly decaying tail. It is therefore
//! common to use a grid that is uniform in *x* = ln *r*, i.e.
//! ```text
//! r[i] = 10^(a + i δ), i ∊ {0, ..., N}
//! ```
//! (note that [`RadialGrid::log`][crate::grid::RadialGrid::log] takes decimal
//! exponents), for which the step in *x* is *δx* = *δ* ln 10. Changing
//! variables to *x* and substituting *y*(*x*) = *u*(*r*) / √*r* removes the
//! first-derivative term that would otherwise appear, leaving
//! ```text
//!  ∂²y
//!  --- = -K(x) y(x)
//!  ∂x²
//!
//! K(x) = 2 r² (E - V(r)) - (l + ½)²
//! ```
//! which is once again of Numerov form. The centrifugal barrier has become the
//! constant (*l* + ½)², so on log grids the potential is carried without it.
//! The true reduced function is recovered as *u* = *y* √*r*.
//!
//! # Shooting
//! For an arbitrary trial energy, the solution integrated from one boundary
//! will generally not satisfy the condition at the other. Far outside the
//! potential, a bound state decays as
//! ```text
//! u(r) ~ exp(-α r), α = √(-2 E)
//! ```
//! so the last two grid points are seeded with *r* exp(-*α* *r*) (or
//! √*r* exp(-*α* *r*) for *y* on log grids), and the recurrence is run inward
//! to the first grid point. The value left there,
//! ```text
//! f(E) = u(r[0])
//! ```
//! is the shooting residual, which vanishes exactly at the eigenvalues. Between
//! eigenvalues it changes sign once for every state crossed, so the
//! eigenvalues in a range \[*E*<sub>min</sub>, *E*<sub>max</sub>\] can be
//! bracketed by evaluating *f* on a coarse grid of energies and looking for
//! sign changes. Each evaluation is a full propagation, so the energy step
//! trades cost against the risk of two sign changes falling in the same step
//! and cancelling out.
//!
//! The reverse is also possible: near the origin, regular solutions behave as
//! *r*<sup>*l* + 1</sup> (or *r*<sup>*l* + ½</sup> for *y*), which can seed an
//! outward integration whose residual is read at the outermost grid point.
//! Inward integration is usually preferred, since growing solutions in the
//! classically forbidden tail then decay in the direction of integration.
//!
//! # Root refinement
//! Within a bracket, the residual is a smooth function with a single simple
//! zero, so any derivative-free bracketed root finder will do. Brent's
//! method[^2] combines inverse quadratic interpolation through the last three
//! iterates with bisection whenever interpolation would leave the bracket or
//! fails to shrink it quickly enough. It therefore keeps the guaranteed
//! convergence of bisection while typically converging superlinearly. A
//! simpler alternative is the [secant method][secant], kept inside the
//! bracket by falling back to bisection.
//!
//! Iteration stops once the bracket around the sign change has shrunk to a
//! relative width of about *ε* (10<sup>-6</sup> by default) or after a fixed
//! number of iterations (50 by default). In the latter case the last iterate is
//! still returned, flagged as unconverged. A small step by itself is not taken
//! as convergence: when the residual is many orders of magnitude larger at one
//! end of the bracket than at the other, the first interpolated steps are tiny
//! while the root is still far away.
//!
//! # Normalization
//! Solutions returned by the propagator carry an arbitrary scale set by the
//! asymptotic seed. They are normalized so that
//! ```text
//! ∫ |u(r)|² dr = 1
//! ```
//! using composite Simpson's rule, which requires an odd number of samples
//! (i.e. an even number of intervals *N*). On log grids the same integral is
//! taken over *x*, with the Jacobian *dr* = *r* *dx*. The radial probability
//! density is then *u*², and the volumetric density of a single electron is
//! *ρ*(*r*) = (*u* / *r*)² / 4π.
//!
//! [^1]: B. Numerov, "Note on the numerical integration of d2x/dt2 = f(x,t)."
//! Astronomische Nachrichten **230** 19 (1927).
//!
//! [^2]: R. P. Brent, *Algorithms for Minimization without Derivatives*,
//! chapter 4 (Prentice-Hall, 1973).
//!
//! [secant]: https://en.wikipedia.org/wiki/Secant_method
